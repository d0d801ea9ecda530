//! Aggregation of the ledger into the metrics shown on the dashboard.
//!
//! Everything here is a pure function of a ledger snapshot and is recomputed
//! on every page load. There is no cached or incremental state to go stale.

use crate::transaction::{Transaction, TransactionKind};

/// The top-level metrics derived from a ledger snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    /// The sum of all income amounts.
    pub total_income: u64,
    /// The sum of all expense amounts.
    pub total_expense: u64,
    /// Income minus expenses. The only metric that can go negative.
    pub balance: i64,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTotals {
    /// The month key in `YYYY-MM` form.
    pub month: String,
    /// The sum of income amounts in this month.
    pub income: u64,
    /// The sum of expense amounts in this month.
    pub expense: u64,
}

/// Compute the income, expense and balance totals for a snapshot.
///
/// All arithmetic is exact integer arithmetic; no floating point is involved
/// anywhere in aggregation. Totals saturate at `u64::MAX` rather than wrap,
/// and the balance clamps either side to `i64::MAX` before subtracting, so
/// pathologically large imported amounts cannot panic or flip signs.
pub fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let mut total_income = 0u64;
    let mut total_expense = 0u64;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => {
                total_income = total_income.saturating_add(transaction.amount);
            }
            TransactionKind::Expense => {
                total_expense = total_expense.saturating_add(transaction.amount);
            }
        }
    }

    LedgerSummary {
        total_income,
        total_expense,
        balance: clamp_to_i64(total_income) - clamp_to_i64(total_expense),
    }
}

// Both operands land in [0, i64::MAX], so the subtraction above cannot
// overflow.
fn clamp_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Group a snapshot's transactions into per-month income/expense totals.
///
/// Months appear in the order they are first encountered while scanning the
/// snapshot, not in calendar order. The snapshot is stored newest first, so
/// this usually means reverse chronological, but interleaved dates keep
/// their scan order. This mirrors how the dashboard chart has always grouped
/// data and is relied upon by its tests; do not "fix" it by sorting.
pub fn monthly_breakdown(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
    let mut months: Vec<MonthlyTotals> = Vec::new();

    for transaction in transactions {
        let key = transaction.month_key();

        let totals = match months.iter().position(|totals| totals.month == key) {
            Some(position) => &mut months[position],
            None => {
                months.push(MonthlyTotals {
                    month: key,
                    income: 0,
                    expense: 0,
                });
                months.last_mut().unwrap()
            }
        };

        match transaction.kind {
            TransactionKind::Income => {
                totals.income = totals.income.saturating_add(transaction.amount);
            }
            TransactionKind::Expense => {
                totals.expense = totals.expense.saturating_add(transaction.amount);
            }
        }
    }

    months
}

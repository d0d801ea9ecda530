//! The transaction model.
//!
//! A transaction's serde shape doubles as the backup exchange record, so the
//! field names below (`date`, `desc`, `amount`, `type`) are a compatibility
//! surface shared with the export/import endpoints and must not change.

use serde::{Deserialize, Serialize};
use time::Date;

/// Whether a transaction brought money in or took money out.
///
/// The direction of a transaction is carried here, never as a sign on the
/// amount itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. groceries.
    Expense,
}

impl TransactionKind {
    /// The lowercase label used in forms and the exchange format.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// An income or expense recorded in the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    #[serde(rename = "desc")]
    pub description: String,
    /// The amount of money in whole Rupiah. Always non-negative, see
    /// [TransactionKind] for the direction.
    pub amount: u64,
    /// Whether this transaction was income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// The `YYYY-MM` month key used for the monthly breakdown.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), u8::from(self.date.month()))
    }
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use super::{Transaction, TransactionKind};

    #[test]
    fn serializes_to_the_exchange_record_shape() {
        let transaction = Transaction {
            date: date!(2024 - 01 - 05),
            description: "Salary".to_owned(),
            amount: 5_000_000,
            kind: TransactionKind::Income,
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "date": "2024-01-05",
                "desc": "Salary",
                "amount": 5_000_000u64,
                "type": "income",
            })
        );
    }

    #[test]
    fn month_key_zero_pads_the_month() {
        let transaction = Transaction {
            date: date!(2024 - 01 - 05),
            description: "Salary".to_owned(),
            amount: 5_000_000,
            kind: TransactionKind::Income,
        };

        assert_eq!(transaction.month_key(), "2024-01");
    }
}

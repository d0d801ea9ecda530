//! The transactions page and the endpoints for adding and deleting
//! transactions.

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{
    AppState, Error,
    alert::Alert,
    currency::{format_rupiah_amount, parse_amount_input},
    endpoints::{self, format_endpoint},
    html::page,
    transaction::{Transaction, TransactionKind},
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The form data for creating a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionForm {
    /// The transaction date as a `YYYY-MM-DD` string.
    pub date: String,
    /// Text detailing the transaction.
    pub description: String,
    /// The amount as entered by the user. Parsed leniently, so both raw
    /// digits and display-formatted values are accepted.
    pub amount: String,
    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,
}

impl TransactionForm {
    /// An empty form with today's date and the expense kind preselected.
    fn empty() -> Self {
        Self {
            date: OffsetDateTime::now_utc().date().to_string(),
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Expense,
        }
    }

    fn parse(&self) -> Result<Transaction, Error> {
        let date = Date::parse(&self.date, DATE_FORMAT)
            .map_err(|_| Error::InvalidDate(self.date.clone()))?;

        Ok(Transaction {
            date,
            description: self.description.trim().to_owned(),
            amount: parse_amount_input(&self.amount),
            kind: self.kind,
        })
    }
}

/// Render an overview of the user's transactions with the add form.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn get_transactions_page(State(state): State<AppState>) -> Markup {
    let ledger = state.ledger.lock().unwrap();

    transactions_page_view(ledger.transactions(), &TransactionForm::empty(), None)
}

/// A route handler for creating a new transaction.
///
/// Redirects to the transactions view on success. On a validation failure the
/// page is re-rendered with an error alert and the entered values retained,
/// and the ledger is left untouched.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let mut ledger = state.ledger.lock().unwrap();

    let result = form.parse().and_then(|transaction| {
        let description = transaction.description.clone();
        ledger.add(transaction)?;
        Ok(description)
    });

    match result {
        Ok(description) => {
            state
                .activity
                .lock()
                .unwrap()
                .record("User", &format!("Added transaction \"{description}\""));

            Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response()
        }
        Err(error) => {
            tracing::debug!("Rejected transaction form: {error}");

            (
                StatusCode::BAD_REQUEST,
                transactions_page_view(
                    ledger.transactions(),
                    &form,
                    Some(Alert::error("Could not add transaction", &error.to_string())),
                ),
            )
                .into_response()
        }
    }
}

/// A route handler for deleting the transaction at `index`.
///
/// Deleting an index that no longer exists leaves the ledger unchanged and
/// re-renders the page with an error alert.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Response {
    let mut ledger = state.ledger.lock().unwrap();

    match ledger.delete(index) {
        Ok(transaction) => {
            state.activity.lock().unwrap().record(
                "User",
                &format!("Deleted transaction \"{}\"", transaction.description),
            );

            Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response()
        }
        Err(error) => {
            tracing::warn!("Delete failed: {error}");

            (
                StatusCode::NOT_FOUND,
                transactions_page_view(
                    ledger.transactions(),
                    &TransactionForm::empty(),
                    Some(Alert::error(
                        "Could not delete transaction",
                        "The transaction could not be found. \
                        Try refreshing the page to see if it has already been deleted.",
                    )),
                ),
            )
                .into_response()
        }
    }
}

fn transactions_page_view(
    transactions: &[Transaction],
    form: &TransactionForm,
    alert: Option<Alert>,
) -> Markup {
    let content = html! {
        @if let Some(alert) = alert {
            (alert.into_html())
        }

        div class="card" {
            h2 { "Transactions" }
            p class="card-subtitle" { "Add and manage your transactions." }

            form class="transaction-form" method="post" action=(endpoints::TRANSACTIONS_API) {
                div {
                    label for="date" { "Date" }
                    input type="date" id="date" name="date" value=(form.date) required;
                }
                div {
                    label for="description" { "Description" }
                    input
                        type="text"
                        id="description"
                        name="description"
                        placeholder="Description"
                        value=(form.description)
                        required;
                }
                div {
                    label for="amount" { "Amount" }
                    input
                        type="text"
                        id="amount"
                        name="amount"
                        placeholder="Amount"
                        inputmode="numeric"
                        value=(form.amount)
                        required;
                }
                div {
                    label for="kind" { "Type" }
                    select id="kind" name="kind" {
                        option
                            value="expense"
                            selected[form.kind == TransactionKind::Expense]
                        { "Expense" }
                        option
                            value="income"
                            selected[form.kind == TransactionKind::Income]
                        { "Income" }
                    }
                }
                div {
                    button type="submit" { "Add" }
                }
            }

            @if transactions.is_empty() {
                p class="empty-state" { "No transactions yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Description" }
                            th { "Amount" }
                            th { "Action" }
                        }
                    }
                    tbody {
                        @for (index, transaction) in transactions.iter().enumerate() {
                            (transaction_row(index, transaction))
                        }
                    }
                }
            }
        }
    };

    page("Transactions", endpoints::TRANSACTIONS_VIEW, &content)
}

fn transaction_row(index: usize, transaction: &Transaction) -> Markup {
    let (amount_class, sign) = match transaction.kind {
        TransactionKind::Income => ("amount amount-income", "+"),
        TransactionKind::Expense => ("amount amount-expense", "-"),
    };

    html! {
        tr {
            td { (transaction.date) }
            td { (transaction.description) }
            td class=(amount_class) {
                (sign) (format_rupiah_amount(transaction.amount))
            }
            td {
                form method="post" action=(format_endpoint(endpoints::DELETE_TRANSACTION, index)) {
                    button type="submit" class="delete" title="Delete" { "×" }
                }
            }
        }
    }
}

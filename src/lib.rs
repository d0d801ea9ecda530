//! Duit is a web app for tracking personal income and spending in Rupiah.
//!
//! The app keeps a session ledger of transactions in memory and serves HTML
//! pages directly: a dashboard with aggregated totals, a transactions page
//! for adding and deleting entries, and a backup page for exporting the
//! ledger as JSON and restoring it from a previously exported document.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod about;
mod activity;
mod alert;
mod app_state;
mod backup;
mod backup_page;
mod charts;
mod currency;
mod dashboard;
mod endpoints;
mod html;
mod ledger;
mod navigation;
mod not_found;
mod routing;
mod summary;
mod transaction;
mod transactions_page;

pub use app_state::AppState;
pub use routing::build_router;

use crate::alert::Alert;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used as a transaction
    /// description.
    #[error("the transaction description must not be empty")]
    EmptyDescription,

    /// A transaction was created with an amount of zero.
    ///
    /// Amounts are unsigned, so zero is the only non-positive value that can
    /// reach the ledger.
    #[error("the transaction amount must be greater than zero")]
    ZeroAmount,

    /// A date string could not be parsed as a `YYYY-MM-DD` calendar date.
    #[error("\"{0}\" is not a valid date in the form YYYY-MM-DD")]
    InvalidDate(String),

    /// Tried to delete a transaction at a position that does not exist.
    #[error("there is no transaction at position {0}")]
    DeleteOutOfRange(usize),

    /// A backup payload was not well-formed JSON.
    #[error("the backup document is not well-formed JSON: {0}")]
    BackupParse(String),

    /// A backup payload was well-formed JSON but did not have the expected
    /// shape: an array of objects, each with exactly the fields `date`,
    /// `desc`, `amount` and `type`.
    #[error("the backup document does not match the expected format: {0}")]
    BackupSchema(String),

    /// The multipart upload for a backup import could not be read.
    #[error("could not read the uploaded file: {0}")]
    Multipart(String),

    /// An error occurred while serializing the ledger as JSON.
    #[error("could not serialize as JSON: {0}")]
    Serialize(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, alert) = match &self {
            Error::EmptyDescription | Error::ZeroAmount | Error::InvalidDate(_) => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid transaction", &self.to_string()),
            ),
            Error::DeleteOutOfRange(_) => (
                StatusCode::NOT_FOUND,
                Alert::error("Could not delete transaction", &self.to_string()),
            ),
            Error::BackupParse(_) | Error::BackupSchema(_) => (
                StatusCode::BAD_REQUEST,
                Alert::error("Failed to import backup.", &self.to_string()),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error_simple(
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        };

        (status, alert.into_html()).into_response()
    }
}

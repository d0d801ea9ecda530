//! The backup page and the export/import endpoints.
//!
//! Export serves the ledger as a downloadable JSON document; import accepts
//! the same document as a multipart upload and replaces the ledger with its
//! contents. A failed import never touches the existing ledger.

use axum::{
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{AppState, Error, alert::Alert, backup, endpoints, html::page};

/// Renders the backup page.
pub async fn get_backup_page() -> Markup {
    backup_page_view(None)
}

/// A route handler that serves the ledger as a downloadable backup document.
///
/// The response mirrors the shape of a file download: an octet stream with a
/// `backup.json` attachment disposition.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn export_backup(State(state): State<AppState>) -> Response {
    let bytes = {
        let ledger = state.ledger.lock().unwrap();

        match backup::export(ledger.transactions()) {
            Ok(bytes) => bytes,
            Err(error) => {
                tracing::error!("Could not serialize the ledger for export: {error}");
                return error.into_response();
            }
        }
    };

    state.activity.lock().unwrap().record("User", "Exported backup");

    (
        [
            (header::CONTENT_TYPE, "application/octet-stream"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"backup.json\"",
            ),
        ],
        bytes,
    )
        .into_response()
}

/// A route handler that restores the ledger from an uploaded backup document.
///
/// The upload is read in full before the ledger lock is taken, so a slow or
/// broken upload can never leave the ledger partially replaced.
///
/// # Panics
///
/// Panics if the lock for the ledger is already held by the same thread.
pub async fn import_backup(State(state): State<AppState>, multipart: Multipart) -> Response {
    let payload = match read_uploaded_file(multipart).await {
        Ok(payload) => payload,
        Err(error) => {
            tracing::error!("Could not read backup upload: {error}");
            return (
                StatusCode::BAD_REQUEST,
                backup_page_view(Some(Alert::error(
                    "Failed to import backup.",
                    &error.to_string(),
                ))),
            )
                .into_response();
        }
    };

    let transactions = match backup::import(&payload) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::warn!("Rejected backup upload: {error}");
            return (
                StatusCode::BAD_REQUEST,
                backup_page_view(Some(Alert::error(
                    "Failed to import backup.",
                    &error.to_string(),
                ))),
            )
                .into_response();
        }
    };

    let count = transactions.len();
    state.ledger.lock().unwrap().replace_all(transactions);
    state.activity.lock().unwrap().record(
        "User",
        &format!("Imported backup with {count} transactions"),
    );

    backup_page_view(Some(Alert::success(
        "Backup imported",
        &format!("Restored {count} transactions. The previous ledger was replaced."),
    )))
    .into_response()
}

/// Read the first file field from the multipart form.
async fn read_uploaded_file(mut multipart: Multipart) -> Result<Vec<u8>, Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|error| Error::Multipart(error.to_string()))?
    {
        if field.name() == Some("file") || field.file_name().is_some() {
            return field
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|error| Error::Multipart(error.to_string()));
        }
    }

    Err(Error::Multipart(
        "the upload did not contain a file".to_owned(),
    ))
}

fn backup_page_view(alert: Option<Alert>) -> Markup {
    let content = html! {
        @if let Some(alert) = alert {
            (alert.into_html())
        }

        div class="card" {
            h2 { "Backup & Restore" }
            p class="card-subtitle" { "Export or import your data as a backup." }

            p {
                a class="button" href=(endpoints::BACKUP_EXPORT) { "Export" }
            }

            form
                method="post"
                action=(endpoints::BACKUP_IMPORT)
                enctype="multipart/form-data"
            {
                label for="file" { "Import a backup file" }
                input type="file" id="file" name="file" accept="application/json" required;
                p {
                    button type="submit" class="button-import" { "Import" }
                }
            }

            p class="card-subtitle" {
                "Importing replaces the current ledger with the contents of the file."
            }
        }
    };

    page("Backup", endpoints::BACKUP_VIEW, &content)
}

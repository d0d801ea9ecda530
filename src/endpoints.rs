//! The app's route URIs.
//!
//! For endpoints that take a parameter, e.g. '/api/transactions/{index}/delete',
//! use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the balance cards and monthly breakdown.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for adding, listing and deleting transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for exporting and importing backups.
pub const BACKUP_VIEW: &str = "/backup";
/// The page showing the session activity log.
pub const ACTIVITY_VIEW: &str = "/activity";
/// The static page describing the app.
pub const ABOUT_VIEW: &str = "/about";

/// The route for creating a transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for deleting the transaction at a position in the ledger.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{index}/delete";
/// The route that serves the ledger as a downloadable backup document.
pub const BACKUP_EXPORT: &str = "/api/backup/export";
/// The route that accepts an uploaded backup document and restores it.
pub const BACKUP_IMPORT: &str = "/api/backup/import";

/// Replace the `{parameter}` in `endpoint_path` with `index`.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and at most a single parameter. If no parameter is found, the original
/// `endpoint_path` is returned.
pub fn format_endpoint(endpoint_path: &str, index: usize) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        index,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know the routes can be parsed as URIs
// without panicking.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::BACKUP_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ACTIVITY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ABOUT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
        assert_endpoint_is_valid_uri(endpoints::DELETE_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::BACKUP_EXPORT);
        assert_endpoint_is_valid_uri(endpoints::BACKUP_IMPORT);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::DELETE_TRANSACTION, 3);

        assert_eq!(formatted_path, "/api/transactions/3/delete");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }
}

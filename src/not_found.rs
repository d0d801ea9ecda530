//! The 404 page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The fallback route handler for URLs that do not match any route.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Build the 404 page response.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Page not found",
            "The page you are looking for does not exist.",
        ),
    )
        .into_response()
}

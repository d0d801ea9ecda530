//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState,
    about::get_about_page,
    activity::get_activity_page,
    backup_page::{export_backup, get_backup_page, import_backup},
    dashboard::get_dashboard_page,
    endpoints,
    not_found::get_404_not_found,
    transactions_page::{
        create_transaction_endpoint, delete_transaction_endpoint, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::BACKUP_VIEW, get(get_backup_page))
        .route(endpoints::ACTIVITY_VIEW, get(get_activity_page))
        .route(endpoints::ABOUT_VIEW, get(get_about_page))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            post(delete_transaction_endpoint),
        )
        .route(endpoints::BACKUP_EXPORT, get(export_backup))
        .route(endpoints::BACKUP_IMPORT, post(import_backup))
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;

    use crate::{AppState, endpoints};

    use super::build_router;

    #[tokio::test]
    async fn root_redirects_to_the_dashboard() {
        let server = TestServer::new(build_router(AppState::default()));

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_see_other();
        assert_eq!(response.header("location"), endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn unknown_route_renders_the_404_page() {
        let server = TestServer::new(build_router(AppState::default()));

        let response = server.get("/no/such/page").await;

        response.assert_status_not_found();
        assert!(response.text().contains("Page not found"));
    }

    #[tokio::test]
    async fn all_pages_render() {
        let server = TestServer::new(build_router(AppState::default()));

        for view in [
            endpoints::DASHBOARD_VIEW,
            endpoints::TRANSACTIONS_VIEW,
            endpoints::BACKUP_VIEW,
            endpoints::ACTIVITY_VIEW,
            endpoints::ABOUT_VIEW,
        ] {
            server.get(view).await.assert_status_ok();
        }
    }
}

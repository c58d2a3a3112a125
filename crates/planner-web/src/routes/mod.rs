//! Route handlers for the planner web interface.

pub mod account;
pub mod health;
pub mod home;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Encode an opaque account id as a single URL path segment.
pub(crate) fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health checks
        .route("/", get(health::health))
        .route("/db-check", get(health::db_check))
        // API endpoints
        .route("/accounts", get(home::accounts_api))
        // HTML pages
        .route("/ui", get(home::index_page))
        .route("/ui/account/:account_id", get(account::account_page))
        .route("/ui/account/:account_id/plan", post(account::save_plan))
        .route("/ui/account/:account_id/contact", post(account::add_contact))
}

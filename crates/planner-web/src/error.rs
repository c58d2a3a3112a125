//! Error types for the planner web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while handling a request.
///
/// Unknown accounts and empty plans are not errors; handlers redirect or
/// render blank forms instead.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] planner_db::DatabaseError),
}

impl IntoResponse for PlannerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PlannerError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type Result<T> = std::result::Result<T, PlannerError>;

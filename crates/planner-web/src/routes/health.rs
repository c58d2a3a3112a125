//! Liveness and database connectivity checks.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub message: String,
}

/// Database connectivity report. Failures are reported in the body, never as
/// a server error.
#[derive(Serialize)]
pub struct DbCheck {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        message: "Weekly planner is running".to_string(),
    })
}

/// Check that the database answers a trivial query.
pub async fn db_check(State(state): State<AppState>) -> Json<DbCheck> {
    match state.db.ping().await {
        Ok(()) => Json(DbCheck {
            ok: true,
            database: Some("connected".to_string()),
            error: None,
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Database check failed");
            Json(DbCheck {
                ok: false,
                database: None,
                error: Some(err.to_string()),
            })
        }
    }
}

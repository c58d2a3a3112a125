//! Web interface for weekly account planning.
//!
//! Server-rendered forms for recording a weekly plan and contacts per account.

mod config;
mod error;
mod routes;
mod state;

use planner_db::Database;
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting planner web server");

    // Connect to database and provision the schema once
    let db = Database::connect_with_pool_size(&config.database_url, config.pool_size).await?;
    db.migrate().await?;

    let state = AppState::new(db);

    let app = routes::router()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    info!(addr = %config.addr, "Planner web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

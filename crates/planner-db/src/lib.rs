//! SQLite persistence layer for the weekly account planner.
//!
//! This crate provides async database operations for accounts, weekly plans
//! and contacts using SQLx with SQLite, plus the week-key normalization that
//! plans are stored under.
//!
//! # Example
//!
//! ```no_run
//! use planner_db::{plan, week, Database, PlanFields};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:planner.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Save this week's plan for an account
//!     let fields = PlanFields {
//!         objectives: Some("grow pipeline".to_string()),
//!         ..Default::default()
//!     };
//!     plan::upsert_plan(db.pool(), "A1", week::this_week(), &fields).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod contact;
pub mod error;
pub mod models;
pub mod plan;
pub mod week;

pub use error::{DatabaseError, Result};
pub use models::{Account, Contact, ContactRole, NewContact, PlanFields};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
///
/// Each store operation checks a connection out of the pool and returns it
/// when the query completes or fails.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    pub const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> planner_db::Result<()> {
    /// // File database
    /// let db = planner_db::Database::connect("sqlite:data/planner.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = planner_db::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(url, pool_size, "Connected to database");

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// Called once at startup; request handlers assume the schema exists.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Round-trip a trivial query to confirm the database is reachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

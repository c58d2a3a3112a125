//! Database error types.

use thiserror::Error;

/// Errors that can occur during database operations.
///
/// Missing rows are not errors here: lookups return `Option` or empty values.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;

//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use planner_db::Database;

/// Planner web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Maximum pooled database connections.
    pub pool_size: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PLANNER_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `DATABASE_URL` | SQLite database URL | (required) |
    /// | `DATABASE_POOL_SIZE` | Connection pool size | `20` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("PLANNER_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPoolSize(raw))?,
            None => Database::DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            addr,
            database_url,
            pool_size,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PLANNER_ADDR format")]
    InvalidAddr,

    #[error("DATABASE_URL not set")]
    MissingDatabaseUrl,

    #[error("Invalid DATABASE_POOL_SIZE: {0}")]
    InvalidPoolSize(String),
}

//! Database connection configuration.
//!
//! Supports configuration via environment variables:
//! - `SCHEMASCOPE_DB_DRIVER`: Database driver (sqlite)
//! - `SCHEMASCOPE_DB_PATH`: Database file path, or `:memory:`

use std::env;

use crate::source::{SourceConnection, SourceError, SqliteSource};

/// Error type for connection configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unsupported driver: {0}. Supported: sqlite")]
    UnsupportedDriver(String),

    #[error("Failed to connect: {0}")]
    Connect(#[from] SourceError),
}

/// Supported database drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// SQLite (file or in-memory)
    Sqlite,
}

impl Driver {
    /// Parse driver from string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, ConnectionError> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Driver::Sqlite),
            other => Err(ConnectionError::UnsupportedDriver(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Driver::Sqlite => "sqlite",
        }
    }
}

/// Database connection configuration.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Database driver.
    pub driver: Driver,
    /// Database file path (or `:memory:`).
    pub path: String,
}

impl ConnectionConfig {
    /// Create a new connection config for a SQLite database file.
    pub fn sqlite(path: impl Into<String>) -> Self {
        Self {
            driver: Driver::Sqlite,
            path: path.into(),
        }
    }

    /// Build configuration from `SCHEMASCOPE_DB_*` environment variables.
    pub fn from_env() -> Result<Self, ConnectionError> {
        let driver = env::var("SCHEMASCOPE_DB_DRIVER")
            .map(|s| Driver::from_str(&s))
            .unwrap_or(Ok(Driver::Sqlite))?;
        let path = env::var("SCHEMASCOPE_DB_PATH")
            .map_err(|_| ConnectionError::MissingEnvVar("SCHEMASCOPE_DB_PATH".to_string()))?;
        Ok(Self { driver, path })
    }

    /// Open the configured database as a crawlable source connection.
    pub fn connect(&self) -> Result<SourceConnection, ConnectionError> {
        match self.driver {
            Driver::Sqlite => {
                let source = if self.path == ":memory:" {
                    SqliteSource::open_in_memory()?
                } else {
                    SqliteSource::open(&self.path)?
                };
                Ok(source.into_connection())
            }
        }
    }
}

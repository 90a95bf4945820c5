//! Source-specific error types.

use thiserror::Error;

/// Result type for metadata source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while talking to a metadata source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to open the underlying database.
    #[error("failed to open database: {0}")]
    Open(#[source] rusqlite::Error),

    /// The driver reported an error while running a metadata query.
    #[error("metadata query failed: {0}")]
    Driver(#[from] rusqlite::Error),

    /// The source does not implement this metadata endpoint.
    #[error("metadata endpoint not supported: {0}")]
    Unsupported(&'static str),

    /// A metadata row had a shape the source could not map.
    #[error("malformed metadata row in {endpoint}: {message}")]
    MalformedRow {
        endpoint: &'static str,
        message: String,
    },
}

impl SourceError {
    /// Whether the error only means a capability is absent, so the caller
    /// can skip the stage instead of failing the crawl.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

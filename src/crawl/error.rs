//! Crawl-specific error types.

use thiserror::Error;

use crate::source::SourceError;

/// Result type for crawl operations.
pub type CrawlResult<T> = Result<T, CrawlError>;

/// Errors that can abort a crawl.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// A retrieval stage failed against the metadata source.
    #[error("error retrieving {stage}: {source}")]
    Retrieval {
        stage: &'static str,
        #[source]
        source: SourceError,
    },

    /// A source error outside any particular stage.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl CrawlError {
    pub fn retrieval(stage: &'static str, source: SourceError) -> Self {
        Self::Retrieval { stage, source }
    }
}

//! Error types for the dirdigest aggregator.

use thiserror::Error;

/// Aggregation errors. The tool is fail-fast: the first error aborts the run.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Traversal error: {0}")]
    Walk(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for DigestError {
    fn from(err: config::ConfigError) -> Self {
        DigestError::Config(err.to_string())
    }
}

//! Error types for the diff crate.

use std::path::PathBuf;

/// Errors that can occur while loading or comparing documents.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A document could not be parsed as JSON.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A document file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The comparison descended deeper than the configured limit.
    #[error("maximum depth {max_depth} exceeded at '{path}'")]
    DepthExceeded { path: String, max_depth: usize },
}

impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;

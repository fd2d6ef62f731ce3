/// Retriever-specific errors
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `RetrieverError`
pub type Result<T> = std::result::Result<T, RetrieverError>;

/// Errors raised by the lofty-backed retriever
#[derive(Error, Debug)]
pub enum RetrieverError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Lofty error
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}

impl From<RetrieverError> for tonearm_core::BridgeError {
    fn from(err: RetrieverError) -> Self {
        tonearm_core::BridgeError::extraction(err.to_string())
    }
}

/// Core error types for Tonearm
use thiserror::Error;

/// Result type alias using `BridgeError`
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Error code surfaced to consumers for every extraction failure.
///
/// The bridge deliberately collapses "file not found", "unsupported format"
/// and "corrupt data" into a single code; the underlying cause is carried in
/// the error message for diagnostics.
pub const ERROR_CODE: &str = "ERROR";

/// Core error type for the Tonearm bridge
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The retriever could not complete the call
    #[error("Failed to extract metadata: {0}")]
    Extraction(String),
}

impl BridgeError {
    /// Create an extraction error with the underlying cause as detail
    pub fn extraction(detail: impl Into<String>) -> Self {
        Self::Extraction(detail.into())
    }

    /// Stable error code reported to consumers
    pub fn code(&self) -> &'static str {
        ERROR_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_error_carries_detail() {
        let err = BridgeError::extraction("No such file or directory");
        assert_eq!(
            err.to_string(),
            "Failed to extract metadata: No such file or directory"
        );
    }

    #[test]
    fn all_failures_report_single_code() {
        let err = BridgeError::extraction("anything");
        assert_eq!(err.code(), "ERROR");
    }
}

//! Error types for comment-board

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for comment-board
#[derive(Debug, Error)]
pub enum BoardError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The comment list could not be obtained from its source
    #[error("Comment source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BoardError>,
    },
}

impl BoardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BoardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Build a source failure
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        BoardError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for comment-board
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::Validation("Comment content cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: Comment content cannot be empty"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = BoardError::Validation("invalid content".to_string());
        let err = err.with_context("Failed to publish comment");
        assert!(err.to_string().contains("Failed to publish comment"));
    }

    #[test]
    fn test_source_unavailable_display() {
        let err = BoardError::source_unavailable("remote", "connection refused");
        assert_eq!(
            err.to_string(),
            "Comment source 'remote' unavailable: connection refused"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
    }
}

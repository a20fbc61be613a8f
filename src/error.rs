//! Error types for the redaction library.
//!
//! The redaction engine itself cannot fail. These errors come from the
//! boundary around it: reading documents, writing outbound text and mapping
//! reports, and parsing placeholder tokens.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for redaction operations.
pub type RedactorResult<T> = Result<T, RedactorError>;

/// Error type for all fallible operations around the redaction engine.
#[derive(Debug, Error)]
pub enum RedactorError {
    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Placeholder token or pattern could not be parsed
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// Invalid configuration, parameters or document content
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// Mapping report could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RedactorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_input(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}

//! Error types for the taskrank crate.

use thiserror::Error;

/// Errors surfaced by ranking and its surrounding I/O.
///
/// Only [`RankError::Payload`] and [`RankError::UnknownStrategy`] come out of
/// the ranking engine itself; malformed per-task fields never produce an
/// error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    // Request errors
    #[error("{reason}")]
    Payload { reason: String },

    #[error("Unknown strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    // I/O errors
    #[error("Failed to read '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },
}

impl RankError {
    /// Shorthand for a payload shape error.
    pub fn payload(reason: impl Into<String>) -> Self {
        Self::Payload {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for RankError {
    fn from(err: std::io::Error) -> Self {
        Self::FileReadError {
            path: "<stdin>".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for ranking operations
pub type RankResult<T> = Result<T, RankError>;

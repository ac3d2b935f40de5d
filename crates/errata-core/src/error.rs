//! Error types for errata

use thiserror::Error;

/// Main error type for errata operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrataError {
    /// Value outside the domain a detector or verbalizer is defined on
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Raw input that could not be read as a number
    #[error("Input error: {0}")]
    Input(String),

    /// Alternate verbalization requested for a number that has none
    #[error("Number {0} has no alternate verbalization")]
    NoVariation(u64),

    /// Error in classifier configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ErrataError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ErrataError::InvalidInput(message.into())
    }
}

/// Result type alias for errata operations
pub type Result<T> = std::result::Result<T, ErrataError>;

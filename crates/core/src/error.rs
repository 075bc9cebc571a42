//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it and carry on with the
/// next operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No entity of the given kind is registered under `code`.
    #[error("no {kind} found with code {code}")]
    NotFound { kind: &'static str, code: String },

    /// User-supplied input could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn not_found(kind: &'static str, code: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            code: code.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

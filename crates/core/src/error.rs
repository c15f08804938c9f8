//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure the registry can report is one of these. There is no
/// infrastructure error kind: the registry is in-memory and synchronous.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (malformed or missing input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation is not permitted given the current registry state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

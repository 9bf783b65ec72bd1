//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// These are faults, not rejections: a submission that fails a business rule is
/// reported through an outcome value, never through this type. `DomainError`
/// covers broken configuration and broken internal invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a malformed category definition).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A category name is not part of the closed registry.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A category name was registered more than once.
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory(name.into())
    }

    pub fn duplicate_category(name: impl Into<String>) -> Self {
        Self::DuplicateCategory(name.into())
    }
}

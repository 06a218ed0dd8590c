//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// unresolvable identities, missing records). Infrastructure concerns live
/// in the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A warehouse token did not resolve to any known warehouse.
    #[error("unknown warehouse: {0}")]
    UnknownWarehouse(String),

    /// A requested record does not exist.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_warehouse(token: impl Into<String>) -> Self {
        Self::UnknownWarehouse(token.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

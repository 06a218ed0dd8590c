//! Storage error model.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level failure. Any query error aborts the operation it belongs
/// to; nothing in this layer retries.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

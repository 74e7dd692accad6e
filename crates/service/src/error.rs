//! Typed error enum for the service layer.
//!
//! Unifies storage and lookup failures so handlers can map each failure
//! mode to a status code without downcasting.

use media_tracker_lookup::LookupError;
use media_tracker_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and lookup failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, constraint).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Title lookup failed or found nothing.
    #[error("lookup: {0}")]
    Lookup(#[from] LookupError),

    /// Caller omitted a required field.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_not_found(),
            Self::Lookup(e) => e.is_not_found(),
            Self::InvalidInput(_) => false,
        }
    }
}

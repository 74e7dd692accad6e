//! Typed error enum for the storage layer.
//!
//! Lets callers match on not-found and validation failures instead of
//! inspecting opaque database errors.

use thiserror::Error;

/// SQLSTATE for a CHECK constraint violation.
const CHECK_VIOLATION: &str = "23514";
/// SQLSTATE for "relation does not exist".
const UNDEFINED_TABLE: &str = "42P01";

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row with this id.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Input rejected before reaching the database.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A CHECK constraint rejected the row (rating outside 0..=5).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The table has not been created yet.
    #[error("table missing: {0}")]
    UndefinedTable(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Message suitable for the `details` field of an API error body.
    pub fn details(&self) -> String {
        match self {
            Self::Database(sqlx::Error::Database(db_err)) => db_err.message().to_owned(),
            Self::Database(err) => err.to_string(),
            Self::NotFound { .. } | Self::Validation(_) => self.to_string(),
            Self::ConstraintViolation(msg) | Self::UndefinedTable(msg) => msg.clone(),
        }
    }
}

/// Custom `From<sqlx::Error>`, not blanket `#[from]`.
///
/// - SQLSTATE 23514 → `ConstraintViolation`
/// - SQLSTATE 42P01 → `UndefinedTable`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == CHECK_VIOLATION) => {
                Self::ConstraintViolation(db_err.message().to_owned())
            },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == UNDEFINED_TABLE) => {
                Self::UndefinedTable(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}

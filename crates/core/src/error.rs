use thiserror::Error;

/// Errors raised while parsing core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown list: {0}")]
    UnknownListKind(String),
}

//! Typed error enum for the lookup crate.

use thiserror::Error;

/// Errors from OMDb lookups.
#[derive(Debug, Error)]
pub enum LookupError {
    /// OMDb answered `Response: "False"`; carries its `Error` text verbatim.
    #[error("{0}")]
    NotFound(String),
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing field in response: {0}")]
    MissingField(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl LookupError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

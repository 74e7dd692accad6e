//! Errors surfaced to the UI.

use thiserror::Error;

/// Failure of a call against the REST API.
#[derive(Debug, Error)]
pub enum UiError {
    /// The server answered with a non-success status. `message` is its `error` field.
    #[error("server returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("JSON parse error in {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl UiError {
    /// The server's own error text, if it sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Server text, or `fallback` when the server gave none or was never reached.
    #[must_use]
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.server_message().unwrap_or(fallback)
    }

    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

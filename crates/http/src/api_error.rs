//! Typed API error for HTTP handlers.
//!
//! Converts service errors into JSON responses: `{"error": message}`, plus
//! `details` for storage failures.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use media_tracker_core::{CoreError, LOOKUP_FAILED};
use media_tracker_lookup::LookupError;
use media_tracker_service::ServiceError;
use media_tracker_storage::StorageError;

#[derive(Debug)]
pub enum ApiError {
    /// 400: missing title or similar caller mistake.
    BadRequest(String),
    /// 404: unknown list, unknown id, or no lookup match.
    NotFound(String),
    /// 500: lookup source unreachable or unparseable. Message is fixed.
    Upstream,
    /// 500: database failure, with the driver's message as `details`.
    Storage { message: String, details: String },
}

impl ApiError {
    /// Map a service error. `failure` is the message used for storage failures,
    /// e.g. "Failed to save favorite".
    pub fn from_service(err: ServiceError, failure: impl Into<String>) -> Self {
        match err {
            ServiceError::InvalidInput(msg)
            | ServiceError::Storage(StorageError::Validation(msg)) => Self::BadRequest(msg),
            ServiceError::Storage(StorageError::NotFound { entity, .. }) => {
                Self::NotFound(format!("{entity} not found"))
            },
            ServiceError::Lookup(LookupError::NotFound(msg)) => Self::NotFound(msg),
            ServiceError::Lookup(e) => {
                tracing::error!(error = %e, "lookup source failure");
                Self::Upstream
            },
            ServiceError::Storage(e) => {
                let message = failure.into();
                tracing::error!(error = %e, "{message}");
                Self::Storage { message, details: e.details() }
            },
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream | Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::Upstream => LOOKUP_FAILED,
            Self::Storage { message, .. } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Storage { message, details } => {
                serde_json::json!({"error": message, "details": details})
            },
            other => serde_json::json!({"error": other.message()}),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownListKind(_) => Self::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// `Json` body extractor whose rejections (missing content type, malformed
/// or mistyped JSON) answer with the same `{"error": ...}` 400 as handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

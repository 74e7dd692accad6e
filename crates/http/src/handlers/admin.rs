//! Database maintenance endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use media_tracker_service::ServiceError;

use crate::AppState;
use crate::response_types::{DbFailureResponse, DbStatusResponse, SetupResponse};

fn failure(error: &'static str, err: &ServiceError) -> Response {
    let details = match err {
        ServiceError::Storage(e) => e.details(),
        other => other.to_string(),
    };
    tracing::error!(error = %err, "{error}");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(DbFailureResponse { success: false, error, details }))
        .into_response()
}

pub async fn test_db(State(state): State<Arc<AppState>>) -> Response {
    match state.collections.ping().await {
        Ok(timestamp) => Json(DbStatusResponse {
            success: true,
            message: "Database connected!",
            timestamp,
        })
        .into_response(),
        Err(e) => failure("Database connection failed", &e),
    }
}

pub async fn setup_db(State(state): State<Arc<AppState>>) -> Response {
    match state.collections.setup().await {
        Ok(()) => {
            Json(SetupResponse { success: true, message: "Tables created successfully!" })
                .into_response()
        },
        Err(e) => failure("Failed to create tables", &e),
    }
}

//! CRUD for every saved list. The `{kind}` path segment selects the list.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use media_tracker_core::{EntryUpdate, ListKind, MediaEntry, NewMediaEntry};

use crate::AppState;
use crate::api_error::{ApiError, ApiJson};
use crate::response_types::DeleteResponse;

pub(crate) fn parse_kind(segment: &str) -> Result<ListKind, ApiError> {
    Ok(segment.parse::<ListKind>()?)
}

/// Ids that are not integers cannot name a row.
pub(crate) fn parse_id(kind: ListKind, raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound(format!("{} not found", kind.rules().label)))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    ApiJson(entry): ApiJson<NewMediaEntry>,
) -> Result<Json<MediaEntry>, ApiError> {
    let kind = parse_kind(&kind)?;
    let created = state
        .collections
        .create(kind, entry)
        .await
        .map_err(|e| ApiError::from_service(e, format!("Failed to save {}", kind.noun())))?;
    tracing::info!(%kind, id = created.id, title = %created.title, "entry saved");
    Ok(Json(created))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<MediaEntry>>, ApiError> {
    let kind = parse_kind(&kind)?;
    state
        .collections
        .list(kind)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, format!("Failed to fetch {kind}")))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
    ApiJson(update): ApiJson<EntryUpdate>,
) -> Result<Json<MediaEntry>, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_id(kind, &id)?;
    state
        .collections
        .update(kind, id, update)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, format!("Failed to update {}", kind.noun())))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_id(kind, &id)?;
    let deleted = state
        .collections
        .delete(kind, id)
        .await
        .map_err(|e| ApiError::from_service(e, format!("Failed to delete {}", kind.noun())))?;
    tracing::info!(%kind, id, "entry deleted");
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("{} deleted successfully", kind.rules().label),
        deleted,
    }))
}

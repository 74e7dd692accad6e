use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use media_tracker_core::LookupRecord;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SearchQuery;

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<LookupRecord>, ApiError> {
    state
        .search
        .search(query.title.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, media_tracker_core::LOOKUP_FAILED))
}

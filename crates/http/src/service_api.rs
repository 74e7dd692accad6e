//! [`MediaApi`] served straight from the services, so the viewer page uses the
//! same UI state models as a remote client without a loopback HTTP hop.

use std::sync::Arc;

use async_trait::async_trait;
use media_tracker_core::{EntryUpdate, ListKind, LookupRecord, MediaEntry, NewMediaEntry};
use media_tracker_ui::{MediaApi, UiError};

use crate::AppState;
use crate::api_error::ApiError;

pub struct ServiceMediaApi {
    state: Arc<AppState>,
}

impl ServiceMediaApi {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

fn rejected(err: ApiError) -> UiError {
    UiError::Api { status: err.status().as_u16(), message: Some(err.message().to_owned()) }
}

#[async_trait]
impl MediaApi for ServiceMediaApi {
    async fn search(&self, title: &str) -> Result<LookupRecord, UiError> {
        self.state
            .search
            .search(Some(title))
            .await
            .map_err(|e| rejected(ApiError::from_service(e, media_tracker_core::LOOKUP_FAILED)))
    }

    async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, UiError> {
        self.state
            .collections
            .list(kind)
            .await
            .map_err(|e| rejected(ApiError::from_service(e, format!("Failed to fetch {kind}"))))
    }

    async fn create(&self, kind: ListKind, entry: &NewMediaEntry) -> Result<MediaEntry, UiError> {
        self.state.collections.create(kind, entry.clone()).await.map_err(|e| {
            rejected(ApiError::from_service(e, format!("Failed to save {}", kind.noun())))
        })
    }

    async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: &EntryUpdate,
    ) -> Result<MediaEntry, UiError> {
        self.state.collections.update(kind, id, update.clone()).await.map_err(|e| {
            rejected(ApiError::from_service(e, format!("Failed to update {}", kind.noun())))
        })
    }

    async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, UiError> {
        self.state.collections.delete(kind, id).await.map_err(|e| {
            rejected(ApiError::from_service(e, format!("Failed to delete {}", kind.noun())))
        })
    }
}

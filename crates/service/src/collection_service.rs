use std::sync::Arc;

use chrono::{DateTime, Utc};
use media_tracker_core::{EntryUpdate, ListKind, MediaEntry, NewMediaEntry, TITLE_REQUIRED};
use media_tracker_storage::EntryStore;

use crate::ServiceError;

fn title_present(title: Option<&str>) -> bool {
    title.is_some_and(|t| !t.is_empty())
}

/// Create/list/update/delete over one saved list, driven by the kind's rules.
pub struct CollectionService {
    store: Arc<dyn EntryStore>,
}

impl CollectionService {
    #[must_use]
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        kind: ListKind,
        entry: NewMediaEntry,
    ) -> Result<MediaEntry, ServiceError> {
        if entry.valid_title().is_none() {
            return Err(ServiceError::InvalidInput(TITLE_REQUIRED.to_owned()));
        }
        Ok(self.store.insert(kind, entry).await?)
    }

    pub async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, ServiceError> {
        Ok(self.store.list(kind).await?)
    }

    /// Replace the kind's mutable fields; omitted ones become NULL.
    ///
    /// Watchlist updates must repeat the title even though it is never written.
    pub async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: EntryUpdate,
    ) -> Result<MediaEntry, ServiceError> {
        if kind.rules().title_required_on_update && !title_present(update.title.as_deref()) {
            return Err(ServiceError::InvalidInput(TITLE_REQUIRED.to_owned()));
        }
        Ok(self.store.update(kind, id, update).await?)
    }

    pub async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, ServiceError> {
        Ok(self.store.delete(kind, id).await?)
    }

    /// Create every table that does not exist yet.
    pub async fn setup(&self) -> Result<(), ServiceError> {
        self.store.init_schema().await?;
        tracing::info!("saved-list tables ready");
        Ok(())
    }

    pub async fn ping(&self) -> Result<DateTime<Utc>, ServiceError> {
        Ok(self.store.ping().await?)
    }
}

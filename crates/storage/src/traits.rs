//! Storage backend trait abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use media_tracker_core::{EntryUpdate, ListKind, MediaEntry, NewMediaEntry};

use crate::error::StorageError;

/// CRUD over the saved collections. Every call targets exactly one list kind.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Create the table for `kind` if it does not exist yet.
    async fn ensure_table(&self, kind: ListKind) -> Result<(), StorageError>;

    /// Create every table up front.
    async fn init_schema(&self) -> Result<(), StorageError> {
        for kind in ListKind::ALL {
            self.ensure_table(*kind).await?;
        }
        Ok(())
    }

    /// Insert a row and return it with its generated `id` and `created_at`.
    async fn insert(&self, kind: ListKind, entry: NewMediaEntry)
    -> Result<MediaEntry, StorageError>;

    /// All rows, newest first.
    async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, StorageError>;

    async fn get(&self, kind: ListKind, id: i32) -> Result<Option<MediaEntry>, StorageError>;

    /// Overwrite the kind's mutable fields. `NotFound` when `id` is absent.
    async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: EntryUpdate,
    ) -> Result<MediaEntry, StorageError>;

    /// Remove a row and return its prior content. `NotFound` when `id` is absent.
    async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, StorageError>;

    /// Database clock, used as a connectivity check.
    async fn ping(&self) -> Result<DateTime<Utc>, StorageError>;
}

//! EntryStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use media_tracker_core::{EntryUpdate, ListKind, MediaEntry, NewMediaEntry, TITLE_REQUIRED};

use super::{ENTRY_COLUMNS, PgStorage, build_update_sql, row_to_entry};
use crate::error::StorageError;
use crate::traits::EntryStore;

fn not_found(kind: ListKind, id: i32) -> StorageError {
    StorageError::NotFound { entity: kind.rules().label, id: id.to_string() }
}

#[async_trait]
impl EntryStore for PgStorage {
    async fn ensure_table(&self, kind: ListKind) -> Result<(), StorageError> {
        self.ensure_ready(kind).await
    }

    async fn insert(
        &self,
        kind: ListKind,
        entry: NewMediaEntry,
    ) -> Result<MediaEntry, StorageError> {
        let Some(title) = entry.valid_title() else {
            return Err(StorageError::Validation(TITLE_REQUIRED.to_owned()));
        };
        self.ensure_ready(kind).await?;

        let row = sqlx::query(&format!(
            "INSERT INTO {kind} (title, year, poster_url, type, rating, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ENTRY_COLUMNS}"
        ))
        .bind(title)
        .bind(&entry.year)
        .bind(&entry.poster_url)
        .bind(&entry.media_type)
        .bind(entry.rating)
        .bind(&entry.notes)
        .fetch_one(&self.pool)
        .await?;

        let stored = row_to_entry(&row)?;
        tracing::debug!(list = %kind, id = stored.id, "inserted entry");
        Ok(stored)
    }

    async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, StorageError> {
        let rows = match sqlx::query(&format!(
            "SELECT {ENTRY_COLUMNS} FROM {kind} ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::from)
        {
            Ok(rows) => rows,
            Err(StorageError::UndefinedTable(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        rows.iter().map(row_to_entry).collect()
    }

    async fn get(&self, kind: ListKind, id: i32) -> Result<Option<MediaEntry>, StorageError> {
        let row = match sqlx::query(&format!("SELECT {ENTRY_COLUMNS} FROM {kind} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)
        {
            Ok(row) => row,
            Err(StorageError::UndefinedTable(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        row.as_ref().map(row_to_entry).transpose()
    }

    async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: EntryUpdate,
    ) -> Result<MediaEntry, StorageError> {
        let Some(existing) = self.get(kind, id).await? else {
            return Err(not_found(kind, id));
        };
        let rules = kind.rules();
        let Some(sql) = build_update_sql(kind.as_str(), rules) else {
            return Ok(existing);
        };

        let mut query = sqlx::query(&sql).bind(id);
        if rules.rating_mutable {
            query = query.bind(update.rating);
        }
        if rules.notes_mutable {
            query = query.bind(update.notes);
        }

        // Row may vanish between the existence check and the write.
        let row = query.fetch_optional(&self.pool).await?.ok_or_else(|| not_found(kind, id))?;
        row_to_entry(&row)
    }

    async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, StorageError> {
        if self.get(kind, id).await?.is_none() {
            return Err(not_found(kind, id));
        }
        let row = sqlx::query(&format!(
            "DELETE FROM {kind} WHERE id = $1 RETURNING {ENTRY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(kind, id))?;
        tracing::debug!(list = %kind, id, "deleted entry");
        row_to_entry(&row)
    }

    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()").fetch_one(&self.pool).await?;
        Ok(now)
    }
}

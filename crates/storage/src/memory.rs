//! In-process backend with the same observable behavior as `PgStorage`.
//!
//! Used by the service and HTTP test suites; enable with the `memory` feature.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use media_tracker_core::{
    EntryUpdate, ListKind, MAX_RATING, MediaEntry, NewMediaEntry, TITLE_REQUIRED,
};

use crate::error::StorageError;
use crate::traits::EntryStore;

#[derive(Debug, Default)]
struct Tables {
    created: HashSet<ListKind>,
    rows: HashMap<ListKind, Vec<MediaEntry>>,
    next_id: HashMap<ListKind, i32>,
    last_created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `kind`'s table has been created.
    #[must_use]
    pub fn has_table(&self, kind: ListKind) -> bool {
        self.lock().created.contains(&kind)
    }
}

fn check_rating(rating: Option<i32>) -> Result<(), StorageError> {
    match rating {
        Some(r) if !(0..=MAX_RATING).contains(&r) => Err(StorageError::ConstraintViolation(
            format!("new row violates check constraint: rating {r} outside 0..={MAX_RATING}"),
        )),
        _ => Ok(()),
    }
}

fn not_found(kind: ListKind, id: i32) -> StorageError {
    StorageError::NotFound { entity: kind.rules().label, id: id.to_string() }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn ensure_table(&self, kind: ListKind) -> Result<(), StorageError> {
        self.lock().created.insert(kind);
        Ok(())
    }

    async fn insert(
        &self,
        kind: ListKind,
        entry: NewMediaEntry,
    ) -> Result<MediaEntry, StorageError> {
        let Some(title) = entry.valid_title().map(str::to_owned) else {
            return Err(StorageError::Validation(TITLE_REQUIRED.to_owned()));
        };
        check_rating(entry.rating)?;

        let mut tables = self.lock();
        tables.created.insert(kind);
        let id = {
            let next = tables.next_id.entry(kind).or_insert(1);
            let id = *next;
            *next += 1;
            id
        };
        let now = Utc::now().naive_utc();
        let created_at = tables.last_created_at.map_or(now, |last| last.max(now));
        tables.last_created_at = Some(created_at);

        let stored = MediaEntry {
            id,
            title,
            year: entry.year,
            poster_url: entry.poster_url,
            media_type: entry.media_type,
            rating: entry.rating,
            notes: entry.notes,
            created_at,
        };
        tables.rows.entry(kind).or_default().push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, StorageError> {
        let tables = self.lock();
        let mut rows = tables.rows.get(&kind).cloned().unwrap_or_default();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn get(&self, kind: ListKind, id: i32) -> Result<Option<MediaEntry>, StorageError> {
        let tables = self.lock();
        Ok(tables.rows.get(&kind).and_then(|rows| rows.iter().find(|e| e.id == id)).cloned())
    }

    async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: EntryUpdate,
    ) -> Result<MediaEntry, StorageError> {
        let rules = kind.rules();
        let mut tables = self.lock();
        let entry = tables
            .rows
            .get_mut(&kind)
            .and_then(|rows| rows.iter_mut().find(|e| e.id == id))
            .ok_or_else(|| not_found(kind, id))?;
        if rules.rating_mutable {
            check_rating(update.rating)?;
            entry.rating = update.rating;
        }
        if rules.notes_mutable {
            entry.notes = update.notes;
        }
        Ok(entry.clone())
    }

    async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, StorageError> {
        let mut tables = self.lock();
        let rows = tables.rows.get_mut(&kind).ok_or_else(|| not_found(kind, id))?;
        let index = rows.iter().position(|e| e.id == id).ok_or_else(|| not_found(kind, id))?;
        Ok(rows.remove(index))
    }

    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        Ok(Utc::now())
    }
}

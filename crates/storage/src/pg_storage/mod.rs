//! PostgreSQL storage backend using sqlx.

mod entries;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDateTime;
use media_tracker_core::{
    CollectionRules, ListKind, MediaEntry, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;

/// Tables known to exist, so writes skip the introspection query.
#[derive(Debug, Default)]
struct SchemaReady {
    favorites: AtomicBool,
    watchlist: AtomicBool,
}

impl SchemaReady {
    fn flag(&self, kind: ListKind) -> &AtomicBool {
        match kind {
            ListKind::Favorites => &self.favorites,
            ListKind::Watchlist => &self.watchlist,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
    ready: Arc<SchemaReady>,
}

impl PgStorage {
    /// Connect the pool. Tables are not touched; call `init_schema` or let
    /// the first insert create them.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        tracing::info!("PgStorage initialized");
        Ok(Self::from_pool(pool))
    }

    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool, ready: Arc::new(SchemaReady::default()) }
    }

    async fn ensure_ready(&self, kind: ListKind) -> Result<(), StorageError> {
        let flag = self.ready.flag(kind);
        if flag.load(Ordering::Acquire) {
            return Ok(());
        }
        crate::pg_schema::ensure_table(&self.pool, kind).await?;
        flag.store(true, Ordering::Release);
        Ok(())
    }
}

pub(crate) const ENTRY_COLUMNS: &str =
    "id, title, year, poster_url, type, rating, notes, created_at";

pub(crate) fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<MediaEntry, StorageError> {
    let created_at: NaiveDateTime = row.try_get("created_at")?;
    Ok(MediaEntry {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        year: row.try_get("year")?,
        poster_url: row.try_get("poster_url")?,
        media_type: row.try_get("type")?,
        rating: row.try_get("rating")?,
        notes: row.try_get("notes")?,
        created_at,
    })
}

/// UPDATE statement touching only the kind's mutable columns.
///
/// `$1` is the id; mutable columns follow in rating, notes order.
/// Returns `None` when the kind has nothing mutable.
pub(crate) fn build_update_sql(table: &str, rules: &CollectionRules) -> Option<String> {
    let mut assignments = Vec::new();
    if rules.rating_mutable {
        assignments.push(format!("rating = ${}", assignments.len() + 2));
    }
    if rules.notes_mutable {
        assignments.push(format!("notes = ${}", assignments.len() + 2));
    }
    if assignments.is_empty() {
        return None;
    }
    Some(format!(
        "UPDATE {table} SET {} WHERE id = $1 RETURNING {ENTRY_COLUMNS}",
        assignments.join(", ")
    ))
}

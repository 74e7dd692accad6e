//! PostgreSQL schema bootstrap for the saved-list tables.

use media_tracker_core::ListKind;
use sqlx::PgPool;

use crate::error::StorageError;

/// SQLSTATEs a concurrent `CREATE TABLE IF NOT EXISTS` can still raise.
const CREATE_RACE_CODES: [&str; 2] = ["42P07", "23505"];

pub(crate) fn create_table_sql(kind: ListKind) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id SERIAL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            year VARCHAR(10),
            poster_url TEXT,
            type VARCHAR(50),
            rating INTEGER CHECK (rating >= 0 AND rating <= 5),
            notes TEXT,
            created_at TIMESTAMP DEFAULT NOW()
        )
        "#,
        table = kind.as_str()
    )
}

async fn table_exists(pool: &PgPool, kind: ListKind) -> Result<bool, StorageError> {
    let exists: bool = sqlx::query_scalar(
        "SELECT EXISTS (
             SELECT 1 FROM information_schema.tables
             WHERE table_schema = current_schema() AND table_name = $1
         )",
    )
    .bind(kind.as_str())
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

fn is_create_race(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err)
        if db_err.code().is_some_and(|c| CREATE_RACE_CODES.iter().any(|code| c == *code)))
}

/// Create the table for `kind` if missing and add the rating/notes columns
/// to tables created before those columns existed.
pub(crate) async fn ensure_table(pool: &PgPool, kind: ListKind) -> Result<(), StorageError> {
    if !table_exists(pool, kind).await? {
        match sqlx::query(&create_table_sql(kind)).execute(pool).await {
            Ok(_) => tracing::info!(table = kind.as_str(), "created table"),
            Err(e) if is_create_race(&e) => {
                tracing::debug!(table = kind.as_str(), "table created concurrently");
            },
            Err(e) => return Err(e.into()),
        }
    }

    let table = kind.as_str();
    sqlx::query(&format!(
        "ALTER TABLE {table} ADD COLUMN IF NOT EXISTS rating INTEGER
             CHECK (rating >= 0 AND rating <= 5)"
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!("ALTER TABLE {table} ADD COLUMN IF NOT EXISTS notes TEXT"))
        .execute(pool)
        .await?;

    Ok(())
}

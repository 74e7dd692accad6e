use media_tracker_core::ListKind;

use crate::error::StorageError;
use crate::pg_schema::create_table_sql;
use crate::pg_storage::build_update_sql;

#[test]
fn test_update_sql_favorites_sets_rating_and_notes() {
    let sql = build_update_sql("favorites", ListKind::Favorites.rules()).unwrap();
    assert!(sql.starts_with("UPDATE favorites SET rating = $2, notes = $3 WHERE id = $1"));
    assert!(sql.contains("RETURNING id, title"));
}

#[test]
fn test_update_sql_watchlist_never_touches_rating_or_title() {
    let sql = build_update_sql("watchlist", ListKind::Watchlist.rules()).unwrap();
    assert!(sql.starts_with("UPDATE watchlist SET notes = $2 WHERE id = $1"));
    assert!(!sql.contains("rating ="));
    assert!(!sql.contains("title ="));
}

#[test]
fn test_update_sql_nothing_mutable() {
    let mut rules = *ListKind::Watchlist.rules();
    rules.notes_mutable = false;
    assert_eq!(build_update_sql("watchlist", &rules), None);
}

#[test]
fn test_create_table_sql_has_rating_check_and_default_timestamp() {
    for kind in ListKind::ALL {
        let sql = create_table_sql(*kind);
        assert!(sql.contains(&format!("CREATE TABLE IF NOT EXISTS {kind}")));
        assert!(sql.contains("CHECK (rating >= 0 AND rating <= 5)"));
        assert!(sql.contains("title VARCHAR(255) NOT NULL"));
        assert!(sql.contains("created_at TIMESTAMP DEFAULT NOW()"));
    }
}

#[test]
fn test_error_details_and_predicates() {
    let err = StorageError::NotFound { entity: "Favorite", id: "7".to_owned() };
    assert!(err.is_not_found());
    assert_eq!(err.details(), "not found: Favorite with id 7");

    let err = StorageError::ConstraintViolation("violates check constraint".to_owned());
    assert!(!err.is_not_found());
    assert_eq!(err.details(), "violates check constraint");

    let err = StorageError::from(sqlx::Error::RowNotFound);
    assert!(matches!(err, StorageError::Database(_)));
}

#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use media_tracker_core::{EntryUpdate, ListKind, LookupRecord, NewMediaEntry};
use media_tracker_lookup::{LookupError, TitleLookup};
use media_tracker_storage::{EntryStore, MemoryStore, StorageError};

use crate::{CollectionService, SearchService, ServiceError};

#[derive(Default)]
struct CountingLookup {
    calls: AtomicUsize,
}

#[async_trait]
impl TitleLookup for CountingLookup {
    async fn lookup(&self, title: &str) -> Result<LookupRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if title == "Zzzzznotamovie" {
            return Err(LookupError::NotFound("Movie not found!".to_owned()));
        }
        Ok(LookupRecord {
            title: title.to_owned(),
            year: Some("2010".to_owned()),
            poster_url: Some("N/A".to_owned()),
            media_type: Some("movie".to_owned()),
        })
    }
}

fn service() -> (Arc<MemoryStore>, CollectionService) {
    let store = Arc::new(MemoryStore::new());
    (Arc::clone(&store), CollectionService::new(store))
}

fn inception() -> NewMediaEntry {
    NewMediaEntry {
        title: Some("Inception".to_owned()),
        year: Some("2010".to_owned()),
        media_type: Some("movie".to_owned()),
        ..NewMediaEntry::default()
    }
}

#[tokio::test]
async fn test_search_requires_title_without_calling_lookup() {
    let lookup = Arc::new(CountingLookup::default());
    let search = SearchService::new(Arc::clone(&lookup) as Arc<dyn TitleLookup>);

    for title in [None, Some("")] {
        let err = search.search(title).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(ref m) if m == "Title is required"));
    }
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);

    let record = search.search(Some("Inception")).await.unwrap();
    assert_eq!(record.title, "Inception");
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_search_not_found_passes_source_message() {
    let search = SearchService::new(Arc::new(CountingLookup::default()));
    let err = search.search(Some("Zzzzznotamovie")).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ServiceError::Lookup(LookupError::NotFound(ref m)) if m == "Movie not found!"));
}

#[tokio::test]
async fn test_create_rejects_missing_or_empty_title() {
    let (store, service) = service();
    for title in [None, Some(String::new())] {
        let entry = NewMediaEntry { title, ..inception() };
        let err = service.create(ListKind::Favorites, entry).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
    assert!(store.list(ListKind::Favorites).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_favorites_scenario() {
    let (_store, service) = service();
    let kind = ListKind::Favorites;

    let created = service.create(kind, inception()).await.unwrap();
    assert_eq!(created.rating, None);
    assert_eq!(created.notes, None);

    let update = EntryUpdate { rating: Some(5), notes: Some("Great".to_owned()), title: None };
    let updated = service.update(kind, created.id, update).await.unwrap();
    assert_eq!(updated.rating, Some(5));
    assert_eq!(updated.notes.as_deref(), Some("Great"));
    assert_eq!(service.list(kind).await.unwrap(), vec![updated.clone()]);

    let deleted = service.delete(kind, created.id).await.unwrap();
    assert_eq!(deleted, updated);
    assert!(service.list(kind).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_favorites_update_omitting_field_clears_it() {
    let (_store, service) = service();
    let kind = ListKind::Favorites;
    let created = service.create(kind, inception()).await.unwrap();
    let rated = EntryUpdate { rating: Some(4), notes: Some("ok".to_owned()), title: None };
    service.update(kind, created.id, rated).await.unwrap();

    let notes_only = EntryUpdate { notes: Some("changed".to_owned()), ..EntryUpdate::default() };
    let updated = service.update(kind, created.id, notes_only).await.unwrap();
    assert_eq!(updated.rating, None);
    assert_eq!(updated.notes.as_deref(), Some("changed"));
}

#[tokio::test]
async fn test_watchlist_update_requires_title_but_does_not_change_it() {
    let (_store, service) = service();
    let kind = ListKind::Watchlist;
    let created = service.create(kind, inception()).await.unwrap();

    let missing = EntryUpdate { notes: Some("soon".to_owned()), ..EntryUpdate::default() };
    let err = service.update(kind, created.id, missing).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let update = EntryUpdate {
        title: Some("Something else".to_owned()),
        rating: Some(2),
        notes: Some("soon".to_owned()),
    };
    let updated = service.update(kind, created.id, update).await.unwrap();
    assert_eq!(updated.title, "Inception");
    assert_eq!(updated.rating, None);
    assert_eq!(updated.notes.as_deref(), Some("soon"));
}

#[tokio::test]
async fn test_unknown_id_is_not_found_and_storage_unchanged() {
    let (store, service) = service();
    let kind = ListKind::Favorites;
    let kept = service.create(kind, inception()).await.unwrap();

    let update = EntryUpdate { rating: Some(1), ..EntryUpdate::default() };
    let err = service.update(kind, 999, update).await.unwrap_err();
    assert!(err.is_not_found());
    let err = service.delete(kind, 999).await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(StorageError::NotFound { entity: "Favorite", .. })));

    assert_eq!(store.list(kind).await.unwrap(), vec![kept]);
}

#[tokio::test]
async fn test_setup_creates_both_tables() {
    let (store, service) = service();
    service.setup().await.unwrap();
    assert!(store.has_table(ListKind::Favorites));
    assert!(store.has_table(ListKind::Watchlist));
    service.ping().await.unwrap();
}

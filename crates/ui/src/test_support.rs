#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use media_tracker_core::{EntryUpdate, ListKind, LookupRecord, MediaEntry, NewMediaEntry};

use crate::{MediaApi, UiError};

pub(crate) fn entry(id: i32, title: &str, year: Option<&str>, media_type: Option<&str>) -> MediaEntry {
    MediaEntry {
        id,
        title: title.to_owned(),
        year: year.map(str::to_owned),
        poster_url: None,
        media_type: media_type.map(str::to_owned),
        rating: None,
        notes: None,
        created_at: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
    }
}

pub(crate) fn record(title: &str) -> LookupRecord {
    LookupRecord {
        title: title.to_owned(),
        year: Some("2010".to_owned()),
        poster_url: Some("https://img.example/poster.jpg".to_owned()),
        media_type: Some("movie".to_owned()),
    }
}

pub(crate) fn rejected(status: u16, message: &str) -> UiError {
    UiError::Api { status, message: Some(message.to_owned()) }
}

/// In-memory [`MediaApi`] recording every call it receives.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) favorites: Mutex<Vec<MediaEntry>>,
    pub(crate) watchlist: Mutex<Vec<MediaEntry>>,
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) updates: Mutex<Vec<EntryUpdate>>,
    pub(crate) fail_with: Mutex<Option<(u16, String)>>,
}

impl FakeApi {
    pub(crate) fn with(kind: ListKind, entries: Vec<MediaEntry>) -> Self {
        let api = Self::default();
        *api.rows(kind).lock().unwrap() = entries;
        api
    }

    pub(crate) fn fail_next(&self, status: u16, message: &str) {
        *self.fail_with.lock().unwrap() = Some((status, message.to_owned()));
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn rows(&self, kind: ListKind) -> &Mutex<Vec<MediaEntry>> {
        match kind {
            ListKind::Favorites => &self.favorites,
            ListKind::Watchlist => &self.watchlist,
        }
    }

    fn record_call(&self, call: String) -> Result<(), UiError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().take() {
            Some((status, message)) => Err(rejected(status, &message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MediaApi for FakeApi {
    async fn search(&self, title: &str) -> Result<LookupRecord, UiError> {
        self.record_call(format!("search {title}"))?;
        Ok(record(title))
    }

    async fn list(&self, kind: ListKind) -> Result<Vec<MediaEntry>, UiError> {
        self.record_call(format!("list {kind}"))?;
        Ok(self.rows(kind).lock().unwrap().clone())
    }

    async fn create(&self, kind: ListKind, new: &NewMediaEntry) -> Result<MediaEntry, UiError> {
        self.record_call(format!("create {kind}"))?;
        let mut rows = self.rows(kind).lock().unwrap();
        let id = rows.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let mut row = entry(id, new.title.as_deref().unwrap_or_default(), None, None);
        row.year.clone_from(&new.year);
        row.media_type.clone_from(&new.media_type);
        row.poster_url.clone_from(&new.poster_url);
        rows.insert(0, row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        kind: ListKind,
        id: i32,
        update: &EntryUpdate,
    ) -> Result<MediaEntry, UiError> {
        self.record_call(format!("update {kind} {id}"))?;
        self.updates.lock().unwrap().push(update.clone());
        let mut rows = self.rows(kind).lock().unwrap();
        let row = rows.iter_mut().find(|e| e.id == id).ok_or_else(|| rejected(404, "not found"))?;
        let rules = kind.rules();
        if rules.rating_mutable {
            row.rating = update.rating;
        }
        if rules.notes_mutable {
            row.notes.clone_from(&update.notes);
        }
        Ok(row.clone())
    }

    async fn delete(&self, kind: ListKind, id: i32) -> Result<MediaEntry, UiError> {
        self.record_call(format!("delete {kind} {id}"))?;
        let mut rows = self.rows(kind).lock().unwrap();
        let pos = rows.iter().position(|e| e.id == id).ok_or_else(|| rejected(404, "not found"))?;
        Ok(rows.remove(pos))
    }
}

//! Media entries: persisted rows, write inputs and lookup results.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::NO_POSTER;

/// A row of the `favorites` or `watchlist` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaEntry {
    pub id: i32,
    pub title: String,
    pub year: Option<String>,
    pub poster_url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl MediaEntry {
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        usable_poster_url(self.poster_url.as_deref())
    }
}

/// Body of a create request. Every field may be absent; the title is validated later.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMediaEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewMediaEntry {
    /// The title, if present and non-empty.
    #[must_use]
    pub fn valid_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

impl From<&LookupRecord> for NewMediaEntry {
    fn from(record: &LookupRecord) -> Self {
        Self {
            title: Some(record.title.clone()),
            year: record.year.clone(),
            poster_url: record.poster_url.clone(),
            media_type: record.media_type.clone(),
            rating: None,
            notes: None,
        }
    }
}

/// Body of an update request.
///
/// Omitted mutable fields are written as NULL, not left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Normalized search hit from the external title database. Never persisted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupRecord {
    pub title: String,
    pub year: Option<String>,
    pub poster_url: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

impl LookupRecord {
    #[must_use]
    pub fn poster(&self) -> Option<&str> {
        usable_poster_url(self.poster_url.as_deref())
    }
}

/// A poster URL worth rendering: present, not blank, not the `"N/A"` sentinel.
#[must_use]
pub fn usable_poster_url(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.trim().is_empty() && *u != NO_POSTER)
}

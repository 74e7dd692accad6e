//! Request/query types (Deserialize)

use media_tracker_core::LookupRecord;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
}

/// Query string of the viewer page.
#[derive(Debug, Default, Deserialize)]
pub struct ViewerQuery {
    /// Saved list the filters apply to; favorites when absent.
    pub list: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub year: Option<String>,
    /// Runs a search when present.
    pub title: Option<String>,
    /// Id of a card in `list` to open in edit mode.
    pub edit: Option<String>,
}

/// A search hit posted back from a result card.
#[derive(Debug, Default, Deserialize)]
pub struct AddResultForm {
    pub title: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub poster_url: Option<String>,
}

impl AddResultForm {
    pub fn into_record(self) -> LookupRecord {
        LookupRecord {
            title: self.title.unwrap_or_default(),
            year: self.year,
            poster_url: self.poster_url,
            media_type: self.media_type,
        }
    }
}

/// Drafts posted from an editing card. `rating` is absent when no star is picked.
#[derive(Debug, Default, Deserialize)]
pub struct EditEntryForm {
    pub notes: Option<String>,
    pub rating: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;

    #[test]
    fn test_viewer_query_renames_type() {
        let q: ViewerQuery =
            serde_json::from_value(serde_json::json!({"list": "watchlist", "type": "movie"})).unwrap();
        assert_eq!(q.media_type.as_deref(), Some("movie"));
        assert_eq!(q.year, None);
    }

    #[test]
    fn test_add_result_form_without_title() {
        let form: AddResultForm =
            serde_json::from_value(serde_json::json!({"type": "series", "year": "2008"})).unwrap();
        let record = form.into_record();
        assert_eq!(record.title, "");
        assert_eq!(record.media_type.as_deref(), Some("series"));
    }
}

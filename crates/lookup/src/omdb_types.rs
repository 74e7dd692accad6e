use media_tracker_core::LookupRecord;
use serde::Deserialize;

/// Raw OMDb `?t=` response. Every field is optional because error bodies
/// carry only `Response` and `Error`.
#[derive(Debug, Deserialize)]
pub(crate) struct OmdbResponse {
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    #[serde(rename = "Type", default)]
    pub media_type: Option<String>,
}

impl OmdbResponse {
    /// OMDb signals a miss with the string `"False"`, not a status code.
    pub(crate) fn is_not_found(&self) -> bool {
        self.response.as_deref().is_some_and(|r| r.eq_ignore_ascii_case("false"))
    }

    pub(crate) fn into_record(self) -> Option<LookupRecord> {
        Some(LookupRecord {
            title: self.title?,
            year: self.year,
            poster_url: self.poster,
            media_type: self.media_type,
        })
    }
}

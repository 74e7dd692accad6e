//! Title search through the external lookup source.

use std::sync::Arc;

use media_tracker_core::{LookupRecord, TITLE_REQUIRED};
use media_tracker_lookup::TitleLookup;

use crate::ServiceError;

pub struct SearchService {
    lookup: Arc<dyn TitleLookup>,
}

impl SearchService {
    #[must_use]
    pub fn new(lookup: Arc<dyn TitleLookup>) -> Self {
        Self { lookup }
    }

    /// One lookup per call. A missing or empty title fails before any request.
    pub async fn search(&self, title: Option<&str>) -> Result<LookupRecord, ServiceError> {
        let Some(title) = title.filter(|t| !t.is_empty()) else {
            return Err(ServiceError::InvalidInput(TITLE_REQUIRED.to_owned()));
        };
        self.lookup.lookup(title).await.map_err(|e| {
            if !e.is_not_found() {
                tracing::error!(title, error = %e, "title lookup failed");
            }
            ServiceError::Lookup(e)
        })
    }
}

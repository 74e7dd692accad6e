//! Title search box.

use media_tracker_core::LookupRecord;

use crate::MediaApi;

const EMPTY_QUERY: &str = "Please enter a movie or show title";
const NOT_FOUND: &str = "Movie/show not found";
const SEARCH_FAILED: &str = "Failed to search. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    query: String,
    loading: bool,
    error: Option<String>,
    results: Vec<LookupRecord>,
}

impl SearchForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn results(&self) -> &[LookupRecord] {
        &self.results
    }

    /// Editing the query clears any previous error.
    pub fn set_query(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.error = None;
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.query.trim().is_empty()
    }

    /// Run one search. A blank query fails locally without a request.
    pub async fn submit(&mut self, api: &dyn MediaApi) {
        if self.query.trim().is_empty() {
            self.error = Some(EMPTY_QUERY.to_owned());
            return;
        }
        self.loading = true;
        self.error = None;
        match api.search(&self.query).await {
            Ok(record) => self.results = vec![record],
            Err(e) => {
                let message = if e.is_api() { e.message_or(NOT_FOUND) } else { SEARCH_FAILED };
                tracing::debug!(query = %self.query, error = %e, "search failed");
                self.error = Some(message.to_owned());
                self.results.clear();
            },
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::UiError;
    use crate::test_support::FakeApi;

    #[tokio::test]
    async fn test_blank_query_makes_no_call() {
        let api = FakeApi::default();
        let mut form = SearchForm::new();
        form.set_query("   ");
        assert!(!form.can_submit());
        form.submit(&api).await;
        assert_eq!(form.error(), Some("Please enter a movie or show title"));
        assert!(api.calls().is_empty());

        form.set_query("Inception");
        assert_eq!(form.error(), None);
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_success_replaces_results() {
        let api = FakeApi::default();
        let mut form = SearchForm::new();
        form.set_query("Inception");
        form.submit(&api).await;
        form.set_query("Tenet");
        form.submit(&api).await;

        assert_eq!(form.results().len(), 1);
        assert_eq!(form.results()[0].title, "Tenet");
        assert!(!form.is_loading());
        assert_eq!(api.calls(), ["search Inception", "search Tenet"]);
    }

    #[tokio::test]
    async fn test_server_error_message_and_fallback() {
        let api = FakeApi::default();
        let mut form = SearchForm::new();
        form.set_query("Inception");
        form.submit(&api).await;

        form.set_query("Zzzzznotamovie");
        api.fail_next(404, "Movie not found!");
        form.submit(&api).await;
        assert_eq!(form.error(), Some("Movie not found!"));
        assert!(form.results().is_empty());
    }

    #[test]
    fn test_error_classification() {
        let no_body = UiError::Api { status: 404, message: None };
        assert_eq!(no_body.message_or(NOT_FOUND), "Movie/show not found");
        let decode = UiError::Decode {
            context: "search result".to_owned(),
            source: serde_json::from_str::<u8>("x").unwrap_err(),
        };
        assert!(!decode.is_api());
    }
}

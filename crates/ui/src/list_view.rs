//! A titled list of cards: search results or one saved list.

use media_tracker_core::{ListKind, LookupRecord};

use crate::{Card, CardMode, Filters, MediaApi, ResultCard, UiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    Search,
    Saved(ListKind),
}

#[derive(Debug, Clone)]
pub struct ListView {
    source: ListSource,
    results: Vec<ResultCard>,
    cards: Vec<Card>,
    pub filters: Filters,
    error: Option<String>,
}

impl ListView {
    #[must_use]
    pub fn new(source: ListSource) -> Self {
        Self {
            source,
            results: Vec::new(),
            cards: Vec::new(),
            filters: Filters::default(),
            error: None,
        }
    }

    #[must_use]
    pub const fn source(&self) -> ListSource {
        self.source
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.source {
            ListSource::Search => "Search Results",
            ListSource::Saved(kind) => kind.rules().heading,
        }
    }

    /// Set when the last refresh failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_results(&mut self, records: Vec<LookupRecord>) {
        self.results = records.into_iter().map(ResultCard::new).collect();
    }

    #[must_use]
    pub fn results(&self) -> &[ResultCard] {
        &self.results
    }

    pub fn result_mut(&mut self, index: usize) -> Option<&mut ResultCard> {
        self.results.get_mut(index)
    }

    /// Saved cards passing the filters, in server order.
    pub fn visible(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards
            .iter()
            .filter(|c| c.mode() != CardMode::Removed && self.filters.matches(c.entry()))
    }

    pub fn card_mut(&mut self, id: i32) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.entry().id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self.source {
            ListSource::Search => self.results.len(),
            ListSource::Saved(_) => self.visible().count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `"1 item"` / `"N items"`; nothing for an empty list.
    #[must_use]
    pub fn count_label(&self) -> Option<String> {
        match self.len() {
            0 => None,
            1 => Some("1 item".to_owned()),
            n => Some(format!("{n} items")),
        }
    }

    #[must_use]
    pub fn empty_message(&self) -> String {
        match self.source {
            ListSource::Search => "No results yet. Search for a movie or show!".to_owned(),
            ListSource::Saved(kind) if self.filters.is_active() => format!(
                "No {}s match your filters. Try adjusting your filter criteria!",
                kind.noun()
            ),
            ListSource::Saved(ListKind::Favorites) => {
                "No favorites yet. Save some movies or shows to get started!".to_owned()
            },
            ListSource::Saved(ListKind::Watchlist) => {
                "Your watchlist is empty. Add movies or shows you want to watch!".to_owned()
            },
        }
    }

    /// Replace every saved card with the server's current list. Cards being edited are discarded.
    pub async fn refresh(&mut self, api: &dyn MediaApi) -> Result<(), UiError> {
        let ListSource::Saved(kind) = self.source else {
            return Ok(());
        };
        match api.list(kind).await {
            Ok(entries) => {
                self.cards = entries.into_iter().map(|e| Card::new(kind, e)).collect();
                self.error = None;
                Ok(())
            },
            Err(e) => {
                tracing::warn!(%kind, error = %e, "list refresh failed");
                self.error = Some(e.message_or("Failed to load list").to_owned());
                Err(e)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::test_support::{FakeApi, entry, record};

    #[test]
    fn test_titles_and_search_messages() {
        let mut search = ListView::new(ListSource::Search);
        assert_eq!(search.title(), "Search Results");
        assert_eq!(search.count_label(), None);
        assert_eq!(search.empty_message(), "No results yet. Search for a movie or show!");

        search.set_results(vec![record("Inception")]);
        assert_eq!(search.count_label().as_deref(), Some("1 item"));
        assert_eq!(ListView::new(ListSource::Saved(ListKind::Watchlist)).title(), "My Watchlist");
    }

    #[tokio::test]
    async fn test_refresh_and_filters() {
        let api = FakeApi::with(
            ListKind::Favorites,
            vec![
                entry(2, "The Office", Some("2005–2013"), Some("series")),
                entry(1, "Inception", Some("2010"), Some("movie")),
            ],
        );
        let mut list = ListView::new(ListSource::Saved(ListKind::Favorites));
        assert_eq!(
            list.empty_message(),
            "No favorites yet. Save some movies or shows to get started!"
        );

        list.refresh(&api).await.unwrap();
        assert_eq!(list.title(), "My Favorites");
        assert_eq!(list.count_label().as_deref(), Some("2 items"));

        list.filters.set_media_type("movie");
        let titles: Vec<&str> = list.visible().map(|c| c.entry().title.as_str()).collect();
        assert_eq!(titles, ["Inception"]);

        list.filters.set_year("1999");
        assert!(list.is_empty());
        assert_eq!(
            list.empty_message(),
            "No favorites match your filters. Try adjusting your filter criteria!"
        );

        list.filters.clear();
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_cards() {
        let api = FakeApi::with(ListKind::Watchlist, vec![entry(1, "Inception", None, None)]);
        let mut list = ListView::new(ListSource::Saved(ListKind::Watchlist));
        list.refresh(&api).await.unwrap();

        api.fail_next(500, "Failed to fetch watchlist");
        assert!(list.refresh(&api).await.is_err());
        assert_eq!(list.error(), Some("Failed to fetch watchlist"));
        assert_eq!(list.len(), 1);
    }
}

//! Top-level UI state: the search form, its results and both saved lists.

use media_tracker_core::{ListKind, LookupRecord};

use crate::{CardOutcome, ListSource, ListView, MediaApi, SearchForm, UiError};

#[derive(Debug, Clone)]
pub struct App {
    pub search: SearchForm,
    results: ListView,
    favorites: ListView,
    watchlist: ListView,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            search: SearchForm::new(),
            results: ListView::new(ListSource::Search),
            favorites: ListView::new(ListSource::Saved(ListKind::Favorites)),
            watchlist: ListView::new(ListSource::Saved(ListKind::Watchlist)),
        }
    }

    #[must_use]
    pub const fn results(&self) -> &ListView {
        &self.results
    }

    #[must_use]
    pub const fn saved(&self, kind: ListKind) -> &ListView {
        match kind {
            ListKind::Favorites => &self.favorites,
            ListKind::Watchlist => &self.watchlist,
        }
    }

    pub fn saved_mut(&mut self, kind: ListKind) -> &mut ListView {
        match kind {
            ListKind::Favorites => &mut self.favorites,
            ListKind::Watchlist => &mut self.watchlist,
        }
    }

    /// Fetch both saved lists. Both are attempted; the first failure is returned.
    pub async fn load(&mut self, api: &dyn MediaApi) -> Result<(), UiError> {
        let favorites = self.favorites.refresh(api).await;
        let watchlist = self.watchlist.refresh(api).await;
        favorites.and(watchlist)
    }

    /// Put records in the results list directly, e.g. a hit posted back by a form.
    pub fn show_results(&mut self, records: Vec<LookupRecord>) {
        self.results.set_results(records);
    }

    pub async fn search(&mut self, api: &dyn MediaApi) {
        self.search.submit(api).await;
        self.results.set_results(self.search.results().to_vec());
    }

    /// Save search result `index` to `kind`, then re-fetch that list.
    pub async fn save_result(
        &mut self,
        api: &dyn MediaApi,
        index: usize,
        kind: ListKind,
    ) -> CardOutcome {
        let Some(card) = self.results.result_mut(index) else {
            return CardOutcome::Unchanged;
        };
        let outcome = card.save_to(api, kind).await;
        self.apply(api, kind, outcome).await;
        outcome
    }

    pub async fn save_card(&mut self, api: &dyn MediaApi, kind: ListKind, id: i32) -> CardOutcome {
        let Some(card) = self.saved_mut(kind).card_mut(id) else {
            return CardOutcome::Unchanged;
        };
        let outcome = card.save(api).await;
        self.apply(api, kind, outcome).await;
        outcome
    }

    pub async fn delete_card(
        &mut self,
        api: &dyn MediaApi,
        kind: ListKind,
        id: i32,
    ) -> CardOutcome {
        let Some(card) = self.saved_mut(kind).card_mut(id) else {
            return CardOutcome::Unchanged;
        };
        let outcome = card.delete(api).await;
        self.apply(api, kind, outcome).await;
        outcome
    }

    async fn apply(&mut self, api: &dyn MediaApi, kind: ListKind, outcome: CardOutcome) {
        if outcome == CardOutcome::Refresh {
            // failure is recorded on the list itself
            let _ = self.saved_mut(kind).refresh(api).await;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::test_support::{FakeApi, entry, record};

    #[tokio::test]
    async fn test_search_then_save_refetches_list() {
        let api = FakeApi::default();
        let mut app = App::new();
        app.load(&api).await.unwrap();

        app.search.set_query("Inception");
        app.search(&api).await;
        assert_eq!(app.results().len(), 1);

        let outcome = app.save_result(&api, 0, ListKind::Favorites).await;
        assert_eq!(outcome, CardOutcome::Refresh);
        assert_eq!(app.saved(ListKind::Favorites).len(), 1);
        assert!(app.saved(ListKind::Watchlist).is_empty());
        assert_eq!(
            api.calls(),
            ["list favorites", "list watchlist", "search Inception", "create favorites", "list favorites"]
        );
    }

    #[tokio::test]
    async fn test_shown_result_can_be_saved() {
        let api = FakeApi::default();
        let mut app = App::new();
        app.show_results(vec![record("Heat")]);
        assert_eq!(app.save_result(&api, 0, ListKind::Watchlist).await, CardOutcome::Refresh);
        assert_eq!(app.results().results()[0].notice(), Some("Added to watchlist!"));
        assert_eq!(api.calls(), ["create watchlist", "list watchlist"]);
    }

    #[tokio::test]
    async fn test_save_result_out_of_range_is_noop() {
        let api = FakeApi::default();
        let mut app = App::new();
        assert_eq!(app.save_result(&api, 3, ListKind::Watchlist).await, CardOutcome::Unchanged);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_card_actions_refetch_full_list() {
        let api = FakeApi::with(ListKind::Watchlist, vec![entry(4, "Tenet", Some("2020"), Some("movie"))]);
        let mut app = App::new();
        app.load(&api).await.unwrap();

        let card = app.saved_mut(ListKind::Watchlist).card_mut(4).unwrap();
        card.begin_edit();
        card.set_draft_notes("cinema");
        assert_eq!(app.save_card(&api, ListKind::Watchlist, 4).await, CardOutcome::Refresh);
        let notes: Vec<_> =
            app.saved(ListKind::Watchlist).visible().map(|c| c.entry().notes.clone()).collect();
        assert_eq!(notes, [Some("cinema".to_owned())]);

        assert_eq!(app.delete_card(&api, ListKind::Watchlist, 4).await, CardOutcome::Refresh);
        assert!(app.saved(ListKind::Watchlist).is_empty());
        assert_eq!(api.calls().last().map(String::as_str), Some("list watchlist"));
    }

    #[tokio::test]
    async fn test_load_tries_both_lists() {
        let api = FakeApi::with(ListKind::Watchlist, vec![entry(1, "Tenet", None, None)]);
        api.fail_next(500, "Failed to fetch favorites");
        let mut app = App::new();
        assert!(app.load(&api).await.is_err());
        assert_eq!(app.saved(ListKind::Watchlist).len(), 1);
        assert_eq!(app.saved(ListKind::Favorites).error(), Some("Failed to fetch favorites"));
    }
}

//! Cards for saved entries and search results.

use media_tracker_core::{EntryUpdate, ListKind, LookupRecord, MediaEntry, NewMediaEntry};

use crate::{MediaApi, RatingControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Viewing,
    Editing,
    /// Deleted on the server; the owning list drops it on the next refresh.
    Removed,
}

/// What the owning list should do after a card action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    /// The server changed; re-fetch the whole list.
    Refresh,
    Unchanged,
}

/// A saved entry, displayed or being edited.
#[derive(Debug, Clone)]
pub struct Card {
    kind: ListKind,
    entry: MediaEntry,
    mode: CardMode,
    draft_rating: RatingControl,
    draft_notes: String,
    notice: Option<String>,
}

impl Card {
    #[must_use]
    pub fn new(kind: ListKind, entry: MediaEntry) -> Self {
        Self {
            kind,
            draft_rating: RatingControl::new(entry.rating, false),
            entry,
            mode: CardMode::Viewing,
            draft_notes: String::new(),
            notice: None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ListKind {
        self.kind
    }

    #[must_use]
    pub const fn entry(&self) -> &MediaEntry {
        &self.entry
    }

    #[must_use]
    pub const fn mode(&self) -> CardMode {
        self.mode
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn draft_notes(&self) -> &str {
        &self.draft_notes
    }

    /// Entries without a title are not shown at all.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.entry.title.is_empty()
    }

    /// The stored rating while viewing, the draft while editing.
    #[must_use]
    pub fn rating_control(&self) -> RatingControl {
        match self.mode {
            CardMode::Editing => self.draft_rating,
            CardMode::Viewing | CardMode::Removed => RatingControl::new(self.entry.rating, false),
        }
    }

    pub fn begin_edit(&mut self) {
        if self.mode != CardMode::Viewing {
            return;
        }
        let rules = self.kind.rules();
        self.draft_rating = RatingControl::new(self.entry.rating, rules.rating_mutable);
        self.draft_notes = self.entry.notes.clone().unwrap_or_default();
        self.notice = None;
        self.mode = CardMode::Editing;
    }

    pub fn set_draft_notes(&mut self, notes: &str) {
        if self.mode == CardMode::Editing {
            notes.clone_into(&mut self.draft_notes);
        }
    }

    pub fn rate(&mut self, star: i32) -> bool {
        self.mode == CardMode::Editing && self.draft_rating.click(star)
    }

    /// Drop the drafts without contacting the server.
    pub fn cancel(&mut self) {
        if self.mode == CardMode::Editing {
            self.draft_notes.clear();
            self.draft_rating = RatingControl::new(self.entry.rating, false);
            self.mode = CardMode::Viewing;
        }
    }

    /// The update body this kind sends for the current drafts.
    #[must_use]
    pub fn pending_update(&self) -> EntryUpdate {
        let rules = self.kind.rules();
        let notes = self.draft_notes.trim();
        EntryUpdate {
            title: rules.title_required_on_update.then(|| self.entry.title.clone()),
            rating: (rules.rating_mutable && self.draft_rating.rating() > 0)
                .then(|| self.draft_rating.rating()),
            notes: (rules.notes_mutable && !notes.is_empty()).then(|| notes.to_owned()),
        }
    }

    pub async fn save(&mut self, api: &dyn MediaApi) -> CardOutcome {
        if self.mode != CardMode::Editing {
            return CardOutcome::Unchanged;
        }
        match api.update(self.kind, self.entry.id, &self.pending_update()).await {
            Ok(updated) => {
                self.entry = updated;
                self.draft_notes.clear();
                self.mode = CardMode::Viewing;
                self.notice = Some("Updated successfully!".to_owned());
                CardOutcome::Refresh
            },
            Err(e) => {
                tracing::warn!(kind = %self.kind, id = self.entry.id, error = %e, "update failed");
                self.notice = Some(format!("Failed to update: {}", e.message_or("Unknown error")));
                CardOutcome::Unchanged
            },
        }
    }

    pub async fn delete(&mut self, api: &dyn MediaApi) -> CardOutcome {
        if self.mode != CardMode::Viewing {
            return CardOutcome::Unchanged;
        }
        match api.delete(self.kind, self.entry.id).await {
            Ok(_) => {
                self.mode = CardMode::Removed;
                self.notice = None;
                CardOutcome::Refresh
            },
            Err(e) => {
                tracing::warn!(kind = %self.kind, id = self.entry.id, error = %e, "delete failed");
                let fallback = format!("Failed to remove from {}", self.kind);
                self.notice = Some(format!("Failed to remove: {}", e.message_or(&fallback)));
                CardOutcome::Unchanged
            },
        }
    }
}

/// A search hit that can be saved to either list.
#[derive(Debug, Clone)]
pub struct ResultCard {
    record: LookupRecord,
    notice: Option<String>,
}

impl ResultCard {
    #[must_use]
    pub const fn new(record: LookupRecord) -> Self {
        Self { record, notice: None }
    }

    #[must_use]
    pub const fn record(&self) -> &LookupRecord {
        &self.record
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.record.title.is_empty()
    }

    pub async fn save_to(&mut self, api: &dyn MediaApi, kind: ListKind) -> CardOutcome {
        match api.create(kind, &NewMediaEntry::from(&self.record)).await {
            Ok(_) => {
                self.notice = Some(format!("Added to {kind}!"));
                CardOutcome::Refresh
            },
            Err(e) => {
                let fallback = format!("Failed to add to {kind}");
                self.notice = Some(format!("Failed to add: {}", e.message_or(&fallback)));
                CardOutcome::Unchanged
            },
        }
    }
}

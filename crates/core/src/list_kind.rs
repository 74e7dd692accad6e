//! Saved-list kinds and the per-kind rules table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which saved collection an entry belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Favorites,
    Watchlist,
}

/// Static description of how a list kind is stored and what may change on update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionRules {
    /// Table name, also the URL path segment.
    pub table: &'static str,
    /// Singular label used in messages ("Favorite not found").
    pub label: &'static str,
    /// Heading shown above the saved list.
    pub heading: &'static str,
    pub rating_mutable: bool,
    pub notes_mutable: bool,
    /// Update requests must carry a title, which is checked but never written.
    pub title_required_on_update: bool,
}

const FAVORITES_RULES: CollectionRules = CollectionRules {
    table: "favorites",
    label: "Favorite",
    heading: "My Favorites",
    rating_mutable: true,
    notes_mutable: true,
    title_required_on_update: false,
};

const WATCHLIST_RULES: CollectionRules = CollectionRules {
    table: "watchlist",
    label: "Watchlist item",
    heading: "My Watchlist",
    rating_mutable: false,
    notes_mutable: true,
    title_required_on_update: true,
};

impl ListKind {
    pub const ALL: &'static [ListKind] = &[ListKind::Favorites, ListKind::Watchlist];

    #[must_use]
    pub const fn rules(&self) -> &'static CollectionRules {
        match *self {
            Self::Favorites => &FAVORITES_RULES,
            Self::Watchlist => &WATCHLIST_RULES,
        }
    }

    /// Table name and path segment.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.rules().table
    }

    /// Lower-cased singular label for "Failed to save ..." messages.
    #[must_use]
    pub fn noun(&self) -> String {
        self.rules().label.to_lowercase()
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "favorites" => Ok(Self::Favorites),
            "watchlist" => Ok(Self::Watchlist),
            other => Err(CoreError::UnknownListKind(other.to_owned())),
        }
    }
}

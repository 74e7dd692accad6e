//! Client-side filtering of saved lists.

use media_tracker_core::MediaEntry;

/// Values offered by the type selector, with their labels. `"all"` unsets the filter.
pub const TYPE_OPTIONS: [(&str, &str); 4] =
    [("all", "All Types"), ("movie", "Movies"), ("series", "TV Series"), ("episode", "Episodes")];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub media_type: Option<String>,
    pub year: Option<String>,
}

impl Filters {
    pub fn set_media_type(&mut self, value: &str) {
        let value = value.trim();
        self.media_type =
            (!value.is_empty() && !value.eq_ignore_ascii_case("all")).then(|| value.to_owned());
    }

    pub fn set_year(&mut self, value: &str) {
        let value = value.trim();
        self.year = (!value.is_empty()).then(|| value.to_owned());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.media_type.is_some() || self.year.is_some()
    }

    /// Type must match exactly (ignoring case); year only has to contain the filter text.
    #[must_use]
    pub fn matches(&self, entry: &MediaEntry) -> bool {
        let type_ok = self.media_type.as_deref().is_none_or(|wanted| {
            entry.media_type.as_deref().is_some_and(|t| t.eq_ignore_ascii_case(wanted))
        });
        let year_ok = self
            .year
            .as_deref()
            .is_none_or(|wanted| entry.year.as_deref().is_some_and(|y| y.contains(wanted)));
        type_ok && year_ok
    }
}

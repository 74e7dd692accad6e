//! Five-star rating widget.

use media_tracker_core::MAX_RATING;

/// Keys a focused star reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKey {
    Enter,
    Space,
    Other,
}

impl StarKey {
    /// Map a DOM-style key name.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Space" | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingControl {
    rating: i32,
    editable: bool,
}

impl RatingControl {
    /// A missing rating shows as zero stars.
    #[must_use]
    pub fn new(rating: Option<i32>, editable: bool) -> Self {
        Self { rating: rating.unwrap_or(0).clamp(0, MAX_RATING), editable }
    }

    #[must_use]
    pub const fn rating(&self) -> i32 {
        self.rating
    }

    #[must_use]
    pub const fn editable(&self) -> bool {
        self.editable
    }

    /// Set the rating to `star`. Returns whether anything changed.
    pub fn click(&mut self, star: i32) -> bool {
        if !self.editable || !(1..=MAX_RATING).contains(&star) || self.rating == star {
            return false;
        }
        self.rating = star;
        true
    }

    pub fn key(&mut self, star: i32, key: StarKey) -> bool {
        match key {
            StarKey::Enter | StarKey::Space => self.click(star),
            StarKey::Other => false,
        }
    }

    /// `(star, filled)` for stars 1 through 5.
    pub fn stars(&self) -> impl Iterator<Item = (i32, bool)> + '_ {
        (1..=MAX_RATING).map(|star| (star, star <= self.rating))
    }

    /// `"n/5"`, or nothing for an unrated entry.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        (self.rating > 0).then(|| format!("{}/{MAX_RATING}", self.rating))
    }
}

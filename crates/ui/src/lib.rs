//! Headless UI for the media tracker.
//!
//! State models (search form, lists, cards, filters, rating) are driven by a
//! rendering shell; every network call goes through [`MediaApi`]. [`render`]
//! turns the state into HTML.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Clients hold trait objects")]

mod api;
mod app;
mod card;
mod error;
mod filter;
mod list_view;
mod rating;
pub mod render;
mod search_form;

pub use api::{HttpMediaApi, MediaApi};
pub use app::App;
pub use card::{Card, CardMode, CardOutcome, ResultCard};
pub use error::UiError;
pub use filter::{Filters, TYPE_OPTIONS};
pub use list_view::{ListSource, ListView};
pub use rating::{RatingControl, StarKey};
pub use search_form::SearchForm;

#[cfg(test)]
mod test_support;

//! Service layer for media-tracker
//!
//! Centralizes validation and list-kind rules between HTTP handlers and storage/lookup.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Services hold trait objects")]

mod collection_service;
mod error;
mod search_service;
#[cfg(test)]
mod tests;

pub use collection_service::CollectionService;
pub use error::ServiceError;
pub use search_service::SearchService;

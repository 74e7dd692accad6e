//! External title lookup (OMDb) for media-tracker.
//!
//! One best-effort request per search: no retries, no caching.

mod client;
pub mod error;
mod omdb_types;

use async_trait::async_trait;
use media_tracker_core::LookupRecord;

pub use client::OmdbClient;
pub use error::LookupError;

/// Resolves a free-text title to a normalized record.
#[async_trait]
pub trait TitleLookup: Send + Sync {
    async fn lookup(&self, title: &str) -> Result<LookupRecord, LookupError>;
}

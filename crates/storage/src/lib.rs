//! Storage layer for media-tracker
//!
//! PostgreSQL tables, one per list kind, accessed through the [`EntryStore`] trait.

pub mod error;
#[cfg(feature = "memory")]
mod memory;
mod pg_schema;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
pub use pg_storage::PgStorage;
pub use traits::EntryStore;

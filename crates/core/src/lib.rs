//! Core types and configuration for media-tracker
//!
//! This crate contains domain types shared across all other crates.

mod config;
mod constants;
mod error;
mod list_kind;
mod media;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use list_kind::*;
pub use media::*;

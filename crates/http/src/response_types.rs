//! Response types (Serialize)

use chrono::{DateTime, Utc};
use media_tracker_core::MediaEntry;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    pub deleted: MediaEntry,
}

#[derive(Debug, Serialize)]
pub struct DbStatusResponse {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SetupResponse {
    pub success: bool,
    pub message: &'static str,
}

/// Failure body of the database maintenance endpoints.
#[derive(Debug, Serialize)]
pub struct DbFailureResponse {
    pub success: bool,
    pub error: &'static str,
    pub details: String,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

//! Types for the video catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A persisted catalog row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Storage-assigned sequence number (primary key).
    pub sn: i64,
    /// Canonical identifier. Not unique; historical rows may repeat it.
    pub canonical_id: String,
    /// Filename at the time of import.
    pub filename: String,
    /// File size in megabytes.
    pub size_mb: f64,
    /// Resolution as "WIDTHxHEIGHT".
    pub resolution: String,
    /// Duration as "HH:MM:SS".
    pub duration: String,
    /// Video codec name.
    pub codec: String,
    /// Video bitrate (best effort).
    pub bitrate: u64,
    /// Whether the release carries a Chinese subtitle.
    pub chs: bool,
    /// When the row was first written.
    pub created_at: DateTime<Utc>,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A record to be written; the store assigns `sn` and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVideoRecord {
    pub canonical_id: String,
    pub filename: String,
    pub size_mb: f64,
    pub resolution: String,
    pub duration: String,
    pub codec: String,
    pub bitrate: u64,
    pub chs: bool,
}

/// Outcome of a batch write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteSummary {
    /// Rows handed to the write path.
    pub considered: usize,
    /// Rows successfully written (inserted or updated).
    pub written: usize,
}

/// Catalog statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total persisted rows.
    pub total_records: u64,
    /// Number of distinct canonical ids.
    pub distinct_ids: u64,
}

/// Errors for catalog operations.
///
/// A failed lookup is a distinct outcome from an empty one; callers must
/// never treat a `Database` error as "record not found".
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

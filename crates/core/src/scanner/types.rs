//! Types for the scanner module.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::{CatalogError, NewVideoRecord, VideoRecord};
use crate::plan::RenamePlan;
use crate::prober::MediaAttributes;

/// Errors that can occur during a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// One scanned file: its rename plan, probed attributes and the result of
/// checking the catalog for prior records under the same identifier.
#[derive(Debug, Clone)]
pub struct ScanDecision {
    /// Sequence number within this scan, starting at 1. Dense over the
    /// files that were successfully probed, so skipped files leave no gap.
    pub sn: u32,
    pub plan: RenamePlan,
    pub attributes: MediaAttributes,
    /// File size in mebibytes, derived from the probed byte size.
    pub size_mb: f64,
    /// Resolution as "WIDTHxHEIGHT".
    pub resolution: String,
    /// Duration rounded up to whole seconds, as (hours, minutes, seconds).
    pub duration_hms: (u64, u64, u64),
    /// Whether the original base name marks a subtitled edition.
    pub has_chinese_sub: bool,
    /// Whether the catalog already held records for this identifier.
    pub existed: bool,
    /// Prior catalog records for this identifier, in insertion order.
    pub prior: Vec<VideoRecord>,
}

impl ScanDecision {
    /// Converts this decision into a record ready for catalog writing.
    /// The filename written is the proposed one, so the catalog reflects
    /// the library state after renaming.
    pub fn to_record(&self) -> NewVideoRecord {
        NewVideoRecord {
            canonical_id: self.plan.canonical_id.clone(),
            filename: self.plan.proposed_name.clone(),
            size_mb: self.size_mb,
            resolution: self.resolution.clone(),
            duration: format_hms(self.duration_hms),
            codec: self.attributes.codec.clone().unwrap_or_default(),
            bitrate: self.attributes.bitrate,
            chs: self.has_chinese_sub,
        }
    }
}

/// The outcome of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Decisions for every file that was probed successfully.
    pub decisions: Vec<ScanDecision>,
    /// Files that could not be probed and were left untouched.
    pub skipped: Vec<PathBuf>,
}

/// Progress notification emitted while a scan is running.
///
/// Sent as each file starts, before it is probed.
#[derive(Debug, Clone)]
pub struct ScanProgress {
    /// 1-based position of the file currently being processed. Counts
    /// every candidate, including files that end up skipped.
    pub processed: usize,
    /// Total number of video files found in the directory.
    pub total: usize,
    /// Name of the file currently being processed.
    pub current_file: String,
}

/// Converts a duration in seconds to (hours, minutes, seconds).
///
/// Seconds are rounded up to the next whole second, and a rounded value
/// of 60 rolls over into the minutes (and minutes into hours). Negative
/// or non-finite inputs map to zero.
pub fn sec_to_hms(secs: f64) -> (u64, u64, u64) {
    if !secs.is_finite() || secs <= 0.0 {
        return (0, 0, 0);
    }

    let total = secs as u64;
    let mut hours = total / 3600;
    let mut minutes = (total % 3600) / 60;
    let mut seconds = total % 60;

    if secs.fract() > 0.0 {
        seconds += 1;
    }
    if seconds == 60 {
        seconds = 0;
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }

    (hours, minutes, seconds)
}

/// Formats an (hours, minutes, seconds) triple as "HH:MM:SS".
pub fn format_hms((h, m, s): (u64, u64, u64)) -> String {
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sec_to_hms_rounds_up() {
        assert_eq!(sec_to_hms(125.4), (0, 2, 6));
    }

    #[test]
    fn test_sec_to_hms_exact_seconds_not_rounded() {
        assert_eq!(sec_to_hms(125.0), (0, 2, 5));
    }

    #[test]
    fn test_sec_to_hms_rollover_to_minute() {
        assert_eq!(sec_to_hms(59.999), (0, 1, 0));
    }

    #[test]
    fn test_sec_to_hms_rollover_cascades_to_hour() {
        assert_eq!(sec_to_hms(3599.5), (1, 0, 0));
    }

    #[test]
    fn test_sec_to_hms_hours() {
        assert_eq!(sec_to_hms(3661.0), (1, 1, 1));
    }

    #[test]
    fn test_sec_to_hms_degenerate_inputs() {
        assert_eq!(sec_to_hms(0.0), (0, 0, 0));
        assert_eq!(sec_to_hms(-5.0), (0, 0, 0));
        assert_eq!(sec_to_hms(f64::NAN), (0, 0, 0));
        assert_eq!(sec_to_hms(f64::INFINITY), (0, 0, 0));
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms((1, 2, 3)), "01:02:03");
        assert_eq!(format_hms((0, 0, 0)), "00:00:00");
        assert_eq!(format_hms((12, 34, 56)), "12:34:56");
    }
}

//! Mock catalog for testing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::Utc;

use crate::catalog::{
    CatalogError, CatalogStats, NewVideoRecord, VideoCatalog, VideoRecord, WriteSummary,
};

/// Mock implementation of the VideoCatalog trait.
///
/// Keeps records in memory and can be told to fail lookups, for testing
/// the failure paths of reconciliation and scanning.
pub struct MockCatalog {
    records: Mutex<Vec<VideoRecord>>,
    fail_lookups: AtomicBool,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_lookups: AtomicBool::new(false),
        }
    }

    /// Makes all subsequent lookups fail with a database error.
    pub fn set_fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    /// Number of records currently held.
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn materialize(&self, record: &NewVideoRecord, sn: i64) -> VideoRecord {
        let now = Utc::now();
        VideoRecord {
            sn,
            canonical_id: record.canonical_id.clone(),
            filename: record.filename.clone(),
            size_mb: record.size_mb,
            resolution: record.resolution.clone(),
            duration: record.duration.clone(),
            codec: record.codec.clone(),
            bitrate: record.bitrate,
            chs: record.chs,
            created_at: now,
            updated_at: now,
        }
    }
}

impl VideoCatalog for MockCatalog {
    fn lookup(&self, canonical_id: &str) -> Result<Vec<VideoRecord>, CatalogError> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(CatalogError::Database("simulated lookup failure".to_string()));
        }
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.canonical_id == canonical_id)
            .cloned()
            .collect())
    }

    fn upsert(&self, record: &NewVideoRecord) -> Result<(), CatalogError> {
        let mut records = self.records.lock().unwrap();
        if let Some(existing) = records
            .iter_mut()
            .find(|r| r.canonical_id == record.canonical_id)
        {
            existing.filename = record.filename.clone();
            existing.size_mb = record.size_mb;
            existing.resolution = record.resolution.clone();
            existing.duration = record.duration.clone();
            existing.codec = record.codec.clone();
            existing.bitrate = record.bitrate;
            existing.chs = record.chs;
            existing.updated_at = Utc::now();
        } else {
            let sn = records.len() as i64 + 1;
            let materialized = self.materialize(record, sn);
            records.push(materialized);
        }
        Ok(())
    }

    fn write_batch(&self, records: &[NewVideoRecord]) -> Result<WriteSummary, CatalogError> {
        for record in records {
            self.upsert(record)?;
        }
        Ok(WriteSummary {
            considered: records.len(),
            written: records.len(),
        })
    }

    fn stats(&self) -> Result<CatalogStats, CatalogError> {
        let records = self.records.lock().unwrap();
        let mut ids: Vec<&str> = records.iter().map(|r| r.canonical_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(CatalogStats {
            total_records: records.len() as u64,
            distinct_ids: ids.len() as u64,
        })
    }

    fn clear(&self) -> Result<(), CatalogError> {
        self.records.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> NewVideoRecord {
        NewVideoRecord {
            canonical_id: id.to_string(),
            filename: format!("{}.mp4", id),
            size_mb: 100.0,
            resolution: "1920x1080".to_string(),
            duration: "00:10:00".to_string(),
            codec: "h264".to_string(),
            bitrate: 4_000_000,
            chs: false,
        }
    }

    #[test]
    fn test_upsert_and_lookup() {
        let catalog = MockCatalog::new();
        catalog.upsert(&record("ABC-123")).unwrap();

        let found = catalog.lookup("ABC-123").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].filename, "ABC-123.mp4");
        assert!(catalog.lookup("XYZ-999").unwrap().is_empty());
    }

    #[test]
    fn test_upsert_updates_in_place() {
        let catalog = MockCatalog::new();
        catalog.upsert(&record("ABC-123")).unwrap();

        let mut updated = record("ABC-123");
        updated.bitrate = 9_000_000;
        catalog.upsert(&updated).unwrap();

        assert_eq!(catalog.record_count(), 1);
        assert_eq!(catalog.lookup("ABC-123").unwrap()[0].bitrate, 9_000_000);
    }

    #[test]
    fn test_fail_lookups() {
        let catalog = MockCatalog::new();
        catalog.set_fail_lookups(true);
        let result = catalog.lookup("ABC-123");
        assert!(matches!(result, Err(CatalogError::Database(_))));
    }

    #[test]
    fn test_stats() {
        let catalog = MockCatalog::new();
        catalog.upsert(&record("ABC-123")).unwrap();
        catalog.upsert(&record("DEF-456")).unwrap();

        let stats = catalog.stats().unwrap();
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.distinct_ids, 2);
    }
}

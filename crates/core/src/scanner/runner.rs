//! Scan execution.

use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use walkdir::WalkDir;

use crate::catalog::{reconcile, VideoCatalog};
use crate::plan::build_plan;
use crate::prober::Prober;

use super::types::{sec_to_hms, ScanDecision, ScanError, ScanProgress, ScanReport};

/// File extensions treated as video files, matched case-insensitively.
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mkv", "avi"];

/// Walks a directory, probes each video file and reconciles it against
/// the catalog.
pub struct Scanner<P, C> {
    prober: P,
    catalog: C,
}

impl<P, C> Scanner<P, C>
where
    P: Prober,
    C: VideoCatalog,
{
    pub fn new(prober: P, catalog: C) -> Self {
        Self { prober, catalog }
    }

    /// The catalog this scanner reconciles against.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Scans a directory without progress reporting.
    pub async fn scan(&self, dir: &Path) -> Result<ScanReport, ScanError> {
        self.run_scan(dir, None).await
    }

    /// Scans a directory, sending a [`ScanProgress`] after each file.
    pub async fn scan_with_progress(
        &self,
        dir: &Path,
        progress: mpsc::Sender<ScanProgress>,
    ) -> Result<ScanReport, ScanError> {
        self.run_scan(dir, Some(progress)).await
    }

    async fn run_scan(
        &self,
        dir: &Path,
        progress: Option<mpsc::Sender<ScanProgress>>,
    ) -> Result<ScanReport, ScanError> {
        if !dir.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let files = find_video_files(dir);
        let total = files.len();
        tracing::info!(directory = %dir.display(), total, "starting scan");

        let mut report = ScanReport::default();
        let mut next_sn: u32 = 1;

        for (processed, path) in files.into_iter().enumerate() {
            if let Some(tx) = &progress {
                // Progress is best effort, a full channel drops the update.
                let _ = tx.try_send(ScanProgress {
                    processed: processed + 1,
                    total,
                    current_file: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                });
            }

            let attributes = match self.prober.probe(&path).await {
                Ok(attributes) => attributes,
                Err(e) => {
                    tracing::warn!(file = %path.display(), error = %e, "probe failed, skipping");
                    report.skipped.push(path);
                    continue;
                }
            };

            let plan = build_plan(&path);
            let reconciliation = reconcile(&plan.canonical_id, &self.catalog)?;

            let has_chinese_sub = plan.base_name().ends_with("-C");
            let decision = ScanDecision {
                sn: next_sn,
                size_mb: attributes.size_mb(),
                resolution: attributes.resolution(),
                duration_hms: sec_to_hms(attributes.duration_secs),
                has_chinese_sub,
                existed: reconciliation.exists,
                prior: reconciliation.prior,
                plan,
                attributes,
            };
            next_sn += 1;
            report.decisions.push(decision);
        }

        tracing::info!(
            decided = report.decisions.len(),
            skipped = report.skipped.len(),
            "scan complete"
        );
        Ok(report)
    }
}

/// Collects video files directly under `dir` and its subdirectories,
/// sorted by file name for a stable scan order.
fn find_video_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    VIDEO_EXTENSIONS
                        .iter()
                        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
                })
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, SqliteCatalog};
    use crate::testing::{MockCatalog, MockProber};
    use std::fs::File;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_find_video_files_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "b.mp4");
        touch(tmp.path(), "a.MKV");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "c.avi");

        let files: Vec<String> = find_video_files(tmp.path())
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files, vec!["a.MKV", "b.mp4", "c.avi"]);
    }

    #[tokio::test]
    async fn test_scan_missing_directory() {
        let scanner = Scanner::new(MockProber::new(), SqliteCatalog::in_memory().unwrap());
        let result = scanner.scan(Path::new("/nonexistent-dir")).await;
        assert!(matches!(result, Err(ScanError::DirectoryNotFound { .. })));
    }

    #[tokio::test]
    async fn test_scan_skips_unreadable_and_keeps_sn_dense() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "abc123.mp4");
        let bad = touch(tmp.path(), "broken.mp4");
        touch(tmp.path(), "xyz-999-C.mkv");

        let prober = MockProber::new();
        prober.fail_for(&bad);

        let scanner = Scanner::new(prober, SqliteCatalog::in_memory().unwrap());
        let report = scanner.scan(tmp.path()).await.unwrap();

        assert_eq!(report.decisions.len(), 2);
        assert_eq!(report.skipped, vec![bad]);
        assert_eq!(report.decisions[0].sn, 1);
        assert_eq!(report.decisions[1].sn, 2);
        assert_eq!(report.decisions[0].plan.canonical_id, "ABC-123");
        assert!(report.decisions[1].has_chinese_sub);
    }

    #[tokio::test]
    async fn test_scan_aborts_on_catalog_failure() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "abc123.mp4");

        let catalog = MockCatalog::new();
        catalog.set_fail_lookups(true);

        let scanner = Scanner::new(MockProber::new(), catalog);
        let result = scanner.scan(tmp.path()).await;
        // A store failure aborts the scan; it must not surface as a
        // report with the file marked "not found".
        assert!(matches!(
            result,
            Err(ScanError::Catalog(CatalogError::Database(_)))
        ));
    }

    #[tokio::test]
    async fn test_scan_reports_progress() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "abc123.mp4");
        touch(tmp.path(), "def456.mp4");

        let scanner = Scanner::new(MockProber::new(), SqliteCatalog::in_memory().unwrap());
        let (tx, mut rx) = mpsc::channel(16);
        scanner.scan_with_progress(tmp.path(), tx).await.unwrap();

        let first = rx.recv().await.unwrap();
        assert_eq!(first.processed, 1);
        assert_eq!(first.total, 2);
        assert_eq!(first.current_file, "abc123.mp4");
        let second = rx.recv().await.unwrap();
        assert_eq!(second.processed, 2);
    }

    #[tokio::test]
    async fn test_scan_flags_existing_records() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "abc123.mp4");

        let catalog = SqliteCatalog::in_memory().unwrap();
        let scanner = Scanner::new(MockProber::new(), catalog);

        let first = scanner.scan(tmp.path()).await.unwrap();
        assert!(!first.decisions[0].existed);

        let record = first.decisions[0].to_record();
        scanner.catalog.upsert(&record).unwrap();

        let second = scanner.scan(tmp.path()).await.unwrap();
        assert!(second.decisions[0].existed);
        assert_eq!(second.decisions[0].prior.len(), 1);
        assert_eq!(second.decisions[0].prior[0].canonical_id, "ABC-123");
    }
}

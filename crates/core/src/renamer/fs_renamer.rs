//! Filesystem renamer implementation.

use async_trait::async_trait;
use tokio::fs;

use super::traits::Renamer;
use super::types::{RenameRequest, RenameSummary};

/// Renames files in place on the local filesystem.
pub struct FsRenamer;

impl FsRenamer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsRenamer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Renamer for FsRenamer {
    fn name(&self) -> &str {
        "fs"
    }

    async fn apply(&self, requests: &[RenameRequest]) -> RenameSummary {
        let mut summary = RenameSummary::default();

        for request in requests {
            if request.is_noop() {
                tracing::debug!(path = %request.source.display(), "name already canonical");
                continue;
            }

            match fs::rename(&request.source, &request.target).await {
                Ok(()) => {
                    tracing::info!(
                        from = %request.source.display(),
                        to = %request.target.display(),
                        "renamed"
                    );
                    summary.succeeded += 1;
                }
                Err(e) => {
                    tracing::error!(
                        from = %request.source.display(),
                        error = %e,
                        "rename failed"
                    );
                    summary.failed += 1;
                    summary
                        .errors
                        .push(format!("{}: {}", request.source.display(), e));
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_apply_renames_files() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("hhd800.com@ABC-123.mp4");
        File::create(&source).unwrap();
        let target = tmp.path().join("ABC-123.mp4");

        let renamer = FsRenamer::new();
        let summary = renamer
            .apply(&[RenameRequest {
                source: source.clone(),
                target: target.clone(),
            }])
            .await;

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 0);
        assert!(!source.exists());
        assert!(target.exists());
    }

    #[tokio::test]
    async fn test_apply_skips_noops() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ABC-123.mp4");
        File::create(&path).unwrap();

        let renamer = FsRenamer::new();
        let summary = renamer
            .apply(&[RenameRequest {
                source: path.clone(),
                target: path.clone(),
            }])
            .await;

        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_apply_records_failures_and_continues() {
        let tmp = tempfile::tempdir().unwrap();
        let good = tmp.path().join("abc123.mp4");
        File::create(&good).unwrap();

        let requests = vec![
            RenameRequest {
                source: PathBuf::from("/nonexistent/missing.mp4"),
                target: PathBuf::from("/nonexistent/MIS-1.mp4"),
            },
            RenameRequest {
                source: good.clone(),
                target: tmp.path().join("ABC-123.mp4"),
            },
        ];

        let renamer = FsRenamer::new();
        let summary = renamer.apply(&requests).await;

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errors.len(), 1);
        assert!(tmp.path().join("ABC-123.mp4").exists());
    }
}

//! Mock prober for testing.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::prober::{MediaAttributes, ProbeError, Prober};

/// Mock implementation of the Prober trait.
///
/// Returns preset attributes per path, a shared default for paths without
/// a preset, and a failure for paths marked unreadable.
pub struct MockProber {
    presets: Mutex<HashMap<PathBuf, MediaAttributes>>,
    failures: Mutex<HashSet<PathBuf>>,
    default: MediaAttributes,
}

impl Default for MockProber {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProber {
    pub fn new() -> Self {
        Self {
            presets: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashSet::new()),
            default: MediaAttributes {
                duration_secs: 125.4,
                codec: Some("h264".to_string()),
                width: 1920,
                height: 1080,
                size_bytes: 512 * 1024 * 1024,
                container: Some("mov,mp4,m4a,3gp,3g2,mj2".to_string()),
                bitrate: 4_500_000,
            },
        }
    }

    /// Sets the attributes returned for a specific path.
    pub fn set_attributes(&self, path: &Path, attributes: MediaAttributes) {
        self.presets
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), attributes);
    }

    /// Makes probing the given path fail.
    pub fn fail_for(&self, path: &Path) {
        self.failures.lock().unwrap().insert(path.to_path_buf());
    }
}

#[async_trait]
impl Prober for MockProber {
    fn name(&self) -> &str {
        "mock"
    }

    async fn probe(&self, path: &Path) -> Result<MediaAttributes, ProbeError> {
        if self.failures.lock().unwrap().contains(path) {
            return Err(ProbeError::probe_failed(format!(
                "simulated probe failure: {}",
                path.display()
            )));
        }

        let presets = self.presets.lock().unwrap();
        Ok(presets.get(path).cloned().unwrap_or_else(|| self.default.clone()))
    }

    async fn validate(&self) -> Result<(), ProbeError> {
        Ok(())
    }
}

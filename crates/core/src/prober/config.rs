//! Configuration for the prober module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the ffprobe-based prober.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProberConfig {
    /// Path to ffprobe binary.
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: PathBuf,

    /// Timeout for a single probe in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_ffprobe_path() -> PathBuf {
    PathBuf::from("ffprobe")
}

fn default_timeout() -> u64 {
    30
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: default_ffprobe_path(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ProberConfig {
    /// Creates a new config with a custom ffprobe path.
    pub fn with_path(ffprobe_path: PathBuf) -> Self {
        Self {
            ffprobe_path,
            ..Default::default()
        }
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

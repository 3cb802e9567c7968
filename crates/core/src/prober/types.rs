//! Types for the prober module.

use serde::{Deserialize, Serialize};

/// Technical attributes of one media file, as reported by the prober.
///
/// Created per scan and never mutated by the core. Missing or unparsable
/// fields fall back to zero/`None` rather than failing the probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAttributes {
    /// Duration in seconds (0.0 when unparsable).
    pub duration_secs: f64,
    /// Video codec name, if a video stream was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    /// Frame width in pixels (0 when unknown).
    pub width: u32,
    /// Frame height in pixels (0 when unknown).
    pub height: u32,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Container format name, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// Video bitrate in bits per second, best effort (0 when unknown).
    pub bitrate: u64,
}

impl MediaAttributes {
    /// File size in megabytes.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    /// Resolution rendered as "WIDTHxHEIGHT".
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mb() {
        let attrs = MediaAttributes {
            duration_secs: 0.0,
            codec: None,
            width: 0,
            height: 0,
            size_bytes: 3 * 1024 * 1024,
            container: None,
            bitrate: 0,
        };
        assert!((attrs.size_mb() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resolution_string() {
        let attrs = MediaAttributes {
            duration_secs: 0.0,
            codec: Some("h264".to_string()),
            width: 1920,
            height: 1080,
            size_bytes: 0,
            container: None,
            bitrate: 0,
        };
        assert_eq!(attrs.resolution(), "1920x1080");
    }
}

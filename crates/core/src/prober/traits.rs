//! Trait definitions for the prober module.

use async_trait::async_trait;
use std::path::Path;

use super::error::ProbeError;
use super::types::MediaAttributes;

/// A prober that can inspect media files.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns the name of this prober implementation.
    fn name(&self) -> &str;

    /// Probes a media file and returns its technical attributes.
    async fn probe(&self, path: &Path) -> Result<MediaAttributes, ProbeError>;

    /// Validates that the prober is properly configured and ready.
    async fn validate(&self) -> Result<(), ProbeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullProber;

    #[async_trait]
    impl Prober for NullProber {
        fn name(&self) -> &str {
            "null"
        }

        async fn probe(&self, _path: &Path) -> Result<MediaAttributes, ProbeError> {
            Ok(MediaAttributes {
                duration_secs: 60.0,
                codec: Some("h264".to_string()),
                width: 1280,
                height: 720,
                size_bytes: 1024,
                container: Some("mp4".to_string()),
                bitrate: 1_000_000,
            })
        }

        async fn validate(&self) -> Result<(), ProbeError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_null_prober() {
        let prober = NullProber;
        let attrs = prober.probe(Path::new("/x.mp4")).await.unwrap();
        assert_eq!(attrs.width, 1280);
        assert_eq!(prober.name(), "null");
    }
}

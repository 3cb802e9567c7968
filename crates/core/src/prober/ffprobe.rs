//! FFprobe-based prober implementation.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;
use tokio::time::{timeout, Duration};

use super::config::ProberConfig;
use super::error::ProbeError;
use super::traits::Prober;
use super::types::MediaAttributes;

/// FFprobe-based prober implementation.
pub struct FfprobeProber {
    config: ProberConfig,
}

impl FfprobeProber {
    /// Creates a new ffprobe prober with the given configuration.
    pub fn new(config: ProberConfig) -> Self {
        Self { config }
    }

    /// Creates a prober with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ProberConfig::default())
    }

    /// Parses ffprobe JSON output into MediaAttributes.
    fn parse_probe_output(output: &str) -> Result<MediaAttributes, ProbeError> {
        #[derive(Deserialize)]
        struct ProbeOutput {
            #[serde(default)]
            format: ProbeFormat,
            #[serde(default)]
            streams: Vec<ProbeStream>,
        }

        #[derive(Deserialize, Default)]
        struct ProbeFormat {
            format_name: Option<String>,
            duration: Option<String>,
            size: Option<String>,
            bit_rate: Option<String>,
        }

        #[derive(Deserialize)]
        struct ProbeStream {
            codec_type: String,
            codec_name: Option<String>,
            bit_rate: Option<String>,
            width: Option<u32>,
            height: Option<u32>,
        }

        let probe: ProbeOutput = serde_json::from_str(output)
            .map_err(|e| ProbeError::parse_error(format!("invalid ffprobe output: {}", e)))?;

        let duration_secs = probe
            .format
            .duration
            .as_ref()
            .and_then(|d| d.parse::<f64>().ok())
            .unwrap_or(0.0);

        let size_bytes = probe
            .format
            .size
            .as_ref()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0);

        let video_stream = probe.streams.iter().find(|s| s.codec_type == "video");

        // Bitrate from the video stream when it reports one, falling back
        // to the container total.
        let bitrate = video_stream
            .and_then(|s| s.bit_rate.as_ref())
            .and_then(|b| b.parse::<u64>().ok())
            .or_else(|| {
                probe
                    .format
                    .bit_rate
                    .as_ref()
                    .and_then(|b| b.parse::<u64>().ok())
            })
            .unwrap_or(0);

        Ok(MediaAttributes {
            duration_secs,
            codec: video_stream.and_then(|s| s.codec_name.clone()),
            width: video_stream.and_then(|s| s.width).unwrap_or(0),
            height: video_stream.and_then(|s| s.height).unwrap_or(0),
            size_bytes,
            container: probe.format.format_name,
            bitrate,
        })
    }
}

#[async_trait]
impl Prober for FfprobeProber {
    fn name(&self) -> &str {
        "ffprobe"
    }

    async fn probe(&self, path: &Path) -> Result<MediaAttributes, ProbeError> {
        if !path.exists() {
            return Err(ProbeError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let command = Command::new(&self.config.ffprobe_path)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .output();

        let output = timeout(Duration::from_secs(self.config.timeout_secs), command)
            .await
            .map_err(|_| ProbeError::Timeout {
                timeout_secs: self.config.timeout_secs,
            })?
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ProbeError::FfprobeNotFound {
                        path: self.config.ffprobe_path.clone(),
                    }
                } else {
                    ProbeError::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(ProbeError::probe_failed(format!(
                "ffprobe failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Self::parse_probe_output(&stdout)
    }

    async fn validate(&self) -> Result<(), ProbeError> {
        let result = Command::new(&self.config.ffprobe_path)
            .arg("-version")
            .output()
            .await;

        if let Err(e) = result {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Err(ProbeError::FfprobeNotFound {
                    path: self.config.ffprobe_path.clone(),
                });
            }
            return Err(ProbeError::Io(e));
        }

        Ok(())
    }
}

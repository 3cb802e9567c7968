//! Media prober - extracting technical attributes from video files.
//!
//! This module provides the [`Prober`] trait and the ffprobe-backed
//! implementation used in production. The scan orchestrator treats any
//! probe failure as "skip this file".

mod config;
mod error;
mod ffprobe;
mod traits;
mod types;

pub use config::ProberConfig;
pub use error::ProbeError;
pub use ffprobe::FfprobeProber;
pub use traits::Prober;
pub use types::MediaAttributes;

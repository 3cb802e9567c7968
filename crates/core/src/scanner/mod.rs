//! Directory scanning - the pipeline that turns a directory of video
//! files into rename plans, probed attributes and catalog decisions.
//!
//! The [`Scanner`] walks a directory, builds a [`RenamePlan`](crate::plan::RenamePlan)
//! for each video file, probes it for technical attributes and checks the
//! catalog for prior records of the same identifier. Files that cannot be
//! probed are skipped and reported; catalog failures abort the scan.

mod runner;
mod types;

pub use runner::Scanner;
pub use types::{
    format_hms, sec_to_hms, ScanDecision, ScanError, ScanProgress, ScanReport,
};

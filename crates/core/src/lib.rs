pub mod catalog;
pub mod config;
pub mod ident;
pub mod plan;
pub mod prober;
pub mod renamer;
pub mod scanner;
pub mod testing;

pub use catalog::{
    reconcile, CatalogError, CatalogStats, NewVideoRecord, Reconciliation, SqliteCatalog,
    VideoCatalog, VideoRecord, WriteSummary,
};
pub use config::{load_config, load_config_from_str, Config, ConfigError};
pub use ident::{classify, normalize, EditionSuffix};
pub use plan::{apply_edit, build_plan, PlanEdit, RenamePlan};
pub use prober::{FfprobeProber, MediaAttributes, ProbeError, Prober, ProberConfig};
pub use renamer::{FsRenamer, RenameRequest, RenameSummary, Renamer};
pub use scanner::{ScanDecision, ScanError, ScanProgress, ScanReport, Scanner};

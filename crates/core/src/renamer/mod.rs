//! Applying rename plans to the filesystem.

mod fs_renamer;
mod traits;
mod types;

pub use fs_renamer::FsRenamer;
pub use traits::Renamer;
pub use types::{RenameRequest, RenameSummary};

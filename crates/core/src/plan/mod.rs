//! Rename planning - computing the proposed filename for a video file.
//!
//! A [`RenamePlan`] combines the canonical identifier, the edition suffix
//! and the original extension into a proposed target filename. Plans are
//! immutable once built; a presentation layer edits them by submitting
//! [`PlanEdit`] intents to the pure [`apply_edit`] function.

mod builder;
mod edit;
mod types;

pub use builder::build_plan;
pub use edit::{apply_edit, PlanEdit};
pub use types::RenamePlan;

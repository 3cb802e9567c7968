//! Types for the renamer module.

use std::path::PathBuf;

use crate::plan::RenamePlan;

/// A single rename to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct RenameRequest {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl RenameRequest {
    /// Builds a request from a plan: original path to proposed path,
    /// within the same directory.
    pub fn from_plan(plan: &RenamePlan) -> Self {
        Self {
            source: plan.path.clone(),
            target: plan.target_path(),
        }
    }

    /// True when source and target are the same path, so there is
    /// nothing to do.
    pub fn is_noop(&self) -> bool {
        self.source == self.target
    }
}

/// Outcome of applying a batch of renames.
#[derive(Debug, Default)]
pub struct RenameSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// One message per failed rename.
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::build_plan;
    use std::path::Path;

    #[test]
    fn test_request_from_plan() {
        let plan = build_plan(Path::new("/videos/hhd800.com@ABC-123.mp4"));
        let request = RenameRequest::from_plan(&plan);
        assert_eq!(request.source, PathBuf::from("/videos/hhd800.com@ABC-123.mp4"));
        assert_eq!(request.target, PathBuf::from("/videos/ABC-123.mp4"));
        assert!(!request.is_noop());
    }

    #[test]
    fn test_noop_when_already_canonical() {
        let plan = build_plan(Path::new("/videos/ABC-123.mp4"));
        let request = RenameRequest::from_plan(&plan);
        assert!(request.is_noop());
    }
}

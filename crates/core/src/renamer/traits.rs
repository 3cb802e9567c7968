//! Trait definitions for the renamer module.

use async_trait::async_trait;

use super::types::{RenameRequest, RenameSummary};

/// Applies rename requests to some backing store.
#[async_trait]
pub trait Renamer: Send + Sync {
    /// Returns the name of this renamer implementation.
    fn name(&self) -> &str;

    /// Applies a batch of renames. Individual failures are recorded in
    /// the summary rather than aborting the batch.
    async fn apply(&self, requests: &[RenameRequest]) -> RenameSummary;
}

//! Types for the plan module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ident::EditionSuffix;

/// A proposed rename for a single video file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenamePlan {
    /// Full path of the file on disk.
    pub path: PathBuf,
    /// Filename as found, including extension.
    pub original_name: String,
    /// Canonical identifier (or the original name when extraction fell back).
    pub canonical_id: String,
    /// Detected edition marker.
    pub edition: EditionSuffix,
    /// Proposed target filename: canonical id + edition literal + extension.
    pub proposed_name: String,
}

impl RenamePlan {
    /// Base of the original filename, without extension.
    pub fn base_name(&self) -> &str {
        split_extension(&self.original_name).0
    }

    /// Extension of the original filename, including the leading dot.
    /// Empty when the file has none.
    pub fn extension(&self) -> &str {
        split_extension(&self.original_name).1
    }

    /// Full target path: the original directory joined with the proposed name.
    pub fn target_path(&self) -> PathBuf {
        self.path.with_file_name(&self.proposed_name)
    }

    /// Recomputes the proposed filename from the current canonical id,
    /// keeping the edition literal and extension.
    pub(crate) fn recompute_proposed(&mut self) {
        self.proposed_name = format!(
            "{}{}{}",
            self.canonical_id,
            self.edition.literal(),
            self.extension()
        );
    }
}

/// Splits a filename into (base, extension-with-dot).
///
/// A leading dot does not start an extension, so dotfiles keep their full
/// name as the base.
pub(crate) fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("ABC-123.mp4"), ("ABC-123", ".mp4"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
    }

    #[test]
    fn test_target_path_stays_in_directory() {
        let plan = RenamePlan {
            path: PathBuf::from("/videos/sub/hhd800.com@ABC-123.mp4"),
            original_name: "hhd800.com@ABC-123.mp4".to_string(),
            canonical_id: "ABC-123".to_string(),
            edition: EditionSuffix::None,
            proposed_name: "ABC-123.mp4".to_string(),
        };
        assert_eq!(plan.target_path(), PathBuf::from("/videos/sub/ABC-123.mp4"));
    }

    #[test]
    fn test_base_name() {
        let plan = RenamePlan {
            path: PathBuf::from("/videos/ABC-123-UC.mp4"),
            original_name: "ABC-123-UC.mp4".to_string(),
            canonical_id: "ABC-123".to_string(),
            edition: EditionSuffix::CensoredRestricted,
            proposed_name: "ABC-123-C.mp4".to_string(),
        };
        assert_eq!(plan.base_name(), "ABC-123-UC");
    }
}

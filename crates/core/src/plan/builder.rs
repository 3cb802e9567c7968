//! Building a rename plan from a file path.

use std::path::Path;

use crate::ident::{classify, normalize};

use super::types::{split_extension, RenamePlan};

/// Builds a rename plan for a single file.
///
/// The canonical identifier is extracted from the full filename, the
/// edition marker from the base name (extension stripped). When no
/// identifier can be extracted the original name is carried through as
/// the canonical id, so the proposed name stays recognizable.
pub fn build_plan(path: &Path) -> RenamePlan {
    let original_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (base, extension) = split_extension(&original_name);
    let canonical_id = normalize(&original_name);
    let edition = classify(base);

    let proposed_name = format!("{}{}{}", canonical_id, edition.literal(), extension);

    RenamePlan {
        path: path.to_path_buf(),
        original_name,
        canonical_id,
        edition,
        proposed_name,
    }
}

//! Edition suffix detection on base filenames.

use serde::{Deserialize, Serialize};

/// Edition marker derived from the trailing characters of a base filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditionSuffix {
    /// No edition marker.
    #[default]
    None,
    /// Censored/restricted cut of a release ("-C" or "-UC" marker).
    CensoredRestricted,
}

impl EditionSuffix {
    /// The literal appended to a proposed filename for this edition.
    pub fn literal(&self) -> &'static str {
        match self {
            EditionSuffix::None => "",
            EditionSuffix::CensoredRestricted => "-C",
        }
    }
}

/// Classifies the edition of a release from its base filename (no extension).
///
/// "-UC" and "-C" are tested as independent suffix predicates; a name ending
/// in "-UC" does not end in the two literal characters "-C", so both checks
/// are required even though they currently map to the same edition.
pub fn classify(base_name: &str) -> EditionSuffix {
    if base_name.ends_with("-UC") {
        EditionSuffix::CensoredRestricted
    } else if base_name.ends_with("-C") {
        EditionSuffix::CensoredRestricted
    } else {
        EditionSuffix::None
    }
}

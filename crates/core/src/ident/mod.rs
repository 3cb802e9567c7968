//! Identifier extraction and edition classification.
//!
//! Video files arrive with catalog identifiers buried in noisy filenames
//! (uploader tags, tracker domains, release-group suffixes). This module
//! derives the canonical `PREFIX-NUMBER` form and detects edition markers.

mod edition;
mod normalizer;

pub use edition::{classify, EditionSuffix};
pub use normalizer::normalize;

//! Canonical identifier extraction from noisy filenames.

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Source-site tags stripped from filenames before identifier extraction.
///
/// These show up prepended or appended by upload sites and would otherwise
/// match the identifier pattern themselves (e.g. "hhd800" reads as a
/// plausible id).
const SOURCE_TAGS: &[&str] = &[
    "hhd800.com",
    "hjd2048.com",
    "zzpp01.com",
    "zzpp06.com",
    "bo99.tv",
    "zzpp03.com",
    "bbs2048.org",
    "big2048.com",
    "avav55.xyz",
    "ddr91",
    "aavv121.com",
    "dioguitar23",
    "yjs521",
    "zzpp08.com",
];

/// All tags combined into a single alternation so removals apply
/// simultaneously rather than one pattern at a time.
static SOURCE_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = SOURCE_TAGS
        .iter()
        .map(|tag| regex_lite::escape(tag))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("source tag alternation is a valid pattern")
});

/// Catalog identifier shape: 2-5 letters, an optional separator
/// (a literal hyphen or a literal "00"), then 2-5 digits.
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z]{2,5})(-|00)?([0-9]{2,5})").expect("id pattern is valid")
});

/// Derives the canonical identifier from a filename.
///
/// Strips every known source-site tag, then takes the first left-to-right
/// match of the identifier pattern and returns it as `PREFIX-NUMBER` with
/// the prefix upper-cased and the digits preserved exactly (leading zeros
/// kept, no re-padding).
///
/// When no pattern matches, the original input is returned unchanged. That
/// is the extraction-failed fallback, not an error; callers proceed with
/// the original name.
pub fn normalize(filename: &str) -> String {
    let cleaned = SOURCE_TAG_PATTERN.replace_all(filename, "");

    match ID_PATTERN.captures(&cleaned) {
        Some(caps) => {
            let letters = &caps[1];
            let digits = &caps[3];
            format!("{}-{}", letters.to_uppercase(), digits)
        }
        None => filename.to_string(),
    }
}

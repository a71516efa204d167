//! Wikilink extraction and link target normalization.
//!
//! Both functions are pure: they never touch the filesystem, so the detector can be driven from
//! in-memory fixtures.
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::paths::NotePath;

/// Matches `[[Target]]` and `[[Target|Alias]]`. Group 1 is the target.
///
/// A target can't contain ']' or '|', and both the target and a present alias must be
/// non-empty, so `[[]]`, `[[|x]]` and `[[A|]]` are not links.
pub const WIKILINK_PATTERN: &str = r"\[\[([^\]|]+)(?:\|[^\]]+)?\]\]";

static WIKILINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(WIKILINK_PATTERN).expect("WIKILINK_PATTERN to be a valid regex"));

/// Returns the set of raw link targets found in `text`.
///
/// Alias text is discarded and targets are trimmed. Unterminated or malformed markup is simply
/// not matched. A target that is only whitespace is dropped.
pub fn extract_wikilinks(text: &str) -> BTreeSet<String> {
    WIKILINK_RE
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .filter(|target| !target.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps a raw link target to the file name it refers to.
///
/// Keeps only the last path component, and appends `.{extension}` unless the name already ends
/// with it (case-insensitive). The case of an existing extension is preserved.
///
/// ```
/// use noet_sweep::link::normalize_link_target;
///
/// assert_eq!(normalize_link_target("folder/Note", "md"), "Note.md");
/// assert_eq!(normalize_link_target("Note.MD", "md"), "Note.MD");
/// ```
pub fn normalize_link_target(raw: &str, extension: &str) -> String {
    let target = NotePath::new(raw);
    let name = target.filename();
    if target.has_extension(extension) {
        name.to_string()
    } else {
        format!("{name}.{}", extension.trim_start_matches('.'))
    }
}

/// Extracts and normalizes every link in `text` in one pass.
pub fn normalized_links(text: &str, extension: &str) -> BTreeSet<String> {
    extract_wikilinks(text)
        .iter()
        .map(|raw| normalize_link_target(raw, extension))
        .collect()
}

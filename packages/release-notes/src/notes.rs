//! Changelog section extraction.
//!
//! A changelog is a list of releases, each introduced by a `## ` heading.
//! The section for a release starts at the first heading that contains its
//! version and runs up to (not including) the next heading that does not.

use tracing::debug;

/// Marker that introduces a release heading.
pub const HEADING_MARKER: &str = "## ";

/// Derive the version string from a release tag (`v1.2.3` -> `1.2.3`).
///
/// Only a single leading `v` is removed.
pub fn version_from_tag(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Whether a line starts a release section.
pub fn is_heading(line: &str) -> bool {
    line.starts_with(HEADING_MARKER)
}

/// Extract the notes for `version` from an ordered sequence of lines.
///
/// Lines are joined as-is, so callers that want the original line breaks
/// preserved should pass lines with their terminators attached (see
/// [`extract_from_str`]). The result is trimmed of surrounding whitespace and
/// is empty when no heading matches.
///
/// Matching is substring containment: `1.2` matches a `## 1.2.3` heading.
pub fn extract_notes<I, S>(lines: I, version: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut note_lines: Vec<S> = Vec::new();

    for line in lines {
        let text = line.as_ref();
        if is_heading(text) && text.contains(version) {
            note_lines.push(line);
        } else if !note_lines.is_empty() && is_heading(text) {
            break;
        } else if !note_lines.is_empty() {
            note_lines.push(line);
        }
    }

    let notes: String = note_lines.iter().map(AsRef::as_ref).collect();
    debug!(
        version,
        lines = note_lines.len(),
        bytes = notes.len(),
        "Collected release section"
    );
    notes.trim().to_string()
}

/// Extract the notes for `version` from a whole changelog.
pub fn extract_from_str(changelog: &str, version: &str) -> String {
    extract_notes(changelog.split_inclusive('\n'), version)
}

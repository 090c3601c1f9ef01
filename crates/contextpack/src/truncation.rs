use crate::estimate::{estimate, CHARS_PER_UNIT};

/// Appended to any content that was cut to fit a unit cap.
pub const TRUNCATION_MARKER: &str = "\n…(truncated)…";

/// Cut `content` to a character prefix and append [`TRUNCATION_MARKER`].
///
/// The prefix leaves room for the marker, so the result estimates to at most
/// `units` for any `units` large enough to hold the marker itself (4+).
/// The cut is a plain character offset, not sentence-aware.
pub fn truncate_to_units(content: &str, units: usize) -> String {
    let marker_chars = TRUNCATION_MARKER.chars().count();
    let keep_chars = (units * CHARS_PER_UNIT).saturating_sub(marker_chars);
    let boundary = char_boundary(content, keep_chars);

    let mut result = String::with_capacity(boundary + TRUNCATION_MARKER.len());
    result.push_str(&content[..boundary]);
    result.push_str(TRUNCATION_MARKER);
    result.trim().to_string()
}

/// Apply a per-section unit cap.
///
/// Returns the content unchanged when it already fits, otherwise the
/// truncated form. The flag reports whether a cut happened.
pub fn cap_units(content: &str, cap: usize) -> (String, bool) {
    if estimate(content) <= cap {
        return (content.to_string(), false);
    }
    (truncate_to_units(content, cap), true)
}

/// Byte offset of the `max_chars`-th character (or the end of `s`).
fn char_boundary(s: &str, max_chars: usize) -> usize {
    s.char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

//! Per-document content extraction.
//!
//! A document may carry its own short-form digest between
//! [`SUMMARY_START`] and [`SUMMARY_END`]; when present and non-empty that
//! digest replaces the full body.

use crate::truncation;

pub const SUMMARY_START: &str = "<!-- SUMMARY_START -->";
pub const SUMMARY_END: &str = "<!-- SUMMARY_END -->";

/// Text strictly between the summary markers, trimmed.
///
/// `None` unless both markers are present with the start before the end.
/// Only the first occurrence of each marker is considered.
pub fn summary_region(text: &str) -> Option<&str> {
    let start = text.find(SUMMARY_START)?;
    let end = text.find(SUMMARY_END)?;
    let body_start = start + SUMMARY_START.len();
    if end < body_start {
        return None;
    }
    Some(text[body_start..end].trim())
}

/// Canonical content for a capped document: the summary region if it has
/// content, else the trimmed full text, then cut to `unit_cap`.
pub fn extract(raw: &str, unit_cap: usize) -> String {
    let content = non_empty_summary(raw).unwrap_or_else(|| raw.trim());
    let (capped, _) = truncation::cap_units(content, unit_cap);
    capped
}

/// Canonical content for a log-like document: the summary region if it has
/// content, else the last `max_lines` lines. Never both.
pub fn extract_tail(raw: &str, max_lines: usize) -> String {
    match non_empty_summary(raw) {
        Some(summary) => summary.to_string(),
        None => tail_lines(raw, max_lines),
    }
}

/// Last `max_lines` lines of `text`, trimmed; the whole trimmed text when it
/// has no more than `max_lines` lines.
pub fn tail_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= max_lines {
        return text.trim().to_string();
    }
    lines[lines.len() - max_lines..].join("\n").trim().to_string()
}

fn non_empty_summary(raw: &str) -> Option<&str> {
    summary_region(raw).filter(|s| !s.is_empty())
}

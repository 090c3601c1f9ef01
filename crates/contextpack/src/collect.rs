use std::collections::{HashMap, HashSet};

use hk_domain::config::Config;

use crate::extract;
use crate::section::{Candidate, Extraction, Section, SectionKind, SectionSource};

pub const INSTRUCTION_TITLE: &str = "Instruction";
pub const SELECTION_TITLE: &str = "Selection";
pub const DIFF_TITLE: &str = "Diff";
pub const SESSION_NOTES_TITLE: &str = "Recent SESSION_NOTES";
pub const PROTOCOL_TITLE: &str = "AGENT_SESSION_PROTOCOL";

/// Baseline documents whose file name ends with this are near-term focus.
const FOCUS_SUFFIX: &str = "NOW.md";

/// Read access to project documents by root-relative path.
///
/// `None` means the document is absent; absent documents are skipped.
pub trait DocSource {
    fn read_doc(&self, rel_path: &str) -> Option<String>;
}

impl DocSource for HashMap<String, String> {
    fn read_doc(&self, rel_path: &str) -> Option<String> {
        self.get(rel_path).cloned()
    }
}

/// Non-document inputs to one assembly.
#[derive(Debug, Clone, Default)]
pub struct PackInputs {
    pub instruction: String,
    /// Already wrapped by [`wrap_fenced`].
    pub selection: Option<String>,
    /// Already wrapped by [`wrap_fenced`].
    pub diff: Option<String>,
    /// Repository agent file the role prompt came from, if any.
    pub role_reference: Option<String>,
}

/// Wrap optional input text as `## <label>` plus a code fence.
///
/// Returns `None` for blank input so it never renders as a placeholder.
pub fn wrap_fenced(label: &str, content: &str) -> Option<String> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    Some(format!("## {label}\n\n```\n{content}\n```"))
}

pub fn is_focus_doc(rel_path: &str) -> bool {
    rel_path.ends_with(FOCUS_SUFFIX)
}

/// Build the candidate list in collection order.
///
/// Nothing is read here; file-backed candidates record their path and
/// extraction mode for [`materialize`].
pub fn collect(inputs: &PackInputs, config: &Config) -> Vec<Candidate> {
    let mut candidates = vec![Candidate::literal(
        INSTRUCTION_TITLE,
        SectionKind::Instruction,
        inputs.instruction.trim(),
    )];

    if let Some(selection) = inputs.selection.as_deref().filter(|s| !s.trim().is_empty()) {
        candidates.push(Candidate::literal(
            SELECTION_TITLE,
            SectionKind::Selection,
            selection,
        ));
    }
    if let Some(diff) = inputs.diff.as_deref().filter(|s| !s.trim().is_empty()) {
        candidates.push(Candidate::literal(DIFF_TITLE, SectionKind::Diff, diff));
    }

    let mut seen = HashSet::new();
    for rel in &config.docs.baseline_files {
        if rel.trim().is_empty() || !seen.insert(rel.as_str()) {
            continue;
        }
        let (kind, cap) = if is_focus_doc(rel) {
            (SectionKind::Focus, config.context.focus_max_units)
        } else {
            (SectionKind::Background, config.context.background_max_units)
        };
        candidates.push(Candidate::file_backed(
            rel.as_str(),
            kind,
            rel.as_str(),
            Extraction::Capped(cap),
        ));
    }

    if !config.docs.session_notes_file.is_empty() {
        candidates.push(Candidate::file_backed(
            SESSION_NOTES_TITLE,
            SectionKind::SessionNotes,
            config.docs.session_notes_file.as_str(),
            Extraction::Tail(config.docs.session_notes_tail_lines),
        ));
    }
    if !config.docs.protocol_file.is_empty() {
        candidates.push(Candidate::file_backed(
            PROTOCOL_TITLE,
            SectionKind::Protocol,
            config.docs.protocol_file.as_str(),
            Extraction::Tail(config.docs.protocol_tail_lines),
        ));
    }

    candidates
}

/// Resolve candidates into sections, reading file-backed ones from `docs`.
///
/// Absent documents are dropped silently.
pub fn materialize(candidates: Vec<Candidate>, docs: &dyn DocSource) -> Vec<Section> {
    let mut sections = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let content = match candidate.source {
            SectionSource::Literal(text) => text,
            SectionSource::FileBacked { path, extraction } => {
                let Some(raw) = docs.read_doc(&path) else {
                    tracing::debug!(path = %path, "document absent, section skipped");
                    continue;
                };
                let normalized = raw.replace("\r\n", "\n");
                match extraction {
                    Extraction::Capped(cap) => extract::extract(&normalized, cap),
                    Extraction::Tail(lines) => extract::extract_tail(&normalized, lines),
                }
            }
        };

        sections.push(Section {
            title: candidate.title,
            kind: candidate.kind,
            priority: candidate.priority,
            content,
        });
    }

    sections
}

use crate::section::{Section, SectionKind};

const HEADER_TITLE: &str = "SESSION START – PROJECT CONTEXT";
const HEADER_INTRO: &str = "You are a local code assistant working on this project.";

const FOOTER_LINES: &[&str] = &[
    "SESSION END – INSTRUCTIONS",
    "",
    "When you finish your response, include a short section titled 'Session Updates' with:",
    "- 2–5 bullets summarizing what we did",
    "- Any updates needed for docs/NOW.md and docs/SESSION_NOTES.md (per AGENT_SESSION_PROTOCOL)",
    "- Next actions (if any)",
];

/// Canonical display order. Kinds not listed sort after all listed ones.
const RENDER_ORDER: &[SectionKind] = &[
    SectionKind::Instruction,
    SectionKind::Focus,
    SectionKind::Background,
    SectionKind::SessionNotes,
    SectionKind::Protocol,
    SectionKind::Selection,
    SectionKind::Diff,
];

fn order_index(kind: SectionKind) -> usize {
    RENDER_ORDER
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(RENDER_ORDER.len())
}

/// Header block, naming the repository agent file when one was used.
pub fn render_header(role_reference: Option<&str>) -> String {
    let mut lines = vec![HEADER_TITLE.to_string(), String::new(), HEADER_INTRO.to_string()];
    if let Some(path) = role_reference {
        lines.push(String::new());
        lines.push(format!("Role reference file: {path}"));
    }
    lines.join("\n").trim().to_string()
}

/// Format one section: heading + content, or the pre-wrapped content as is.
pub fn format_section(section: &Section) -> String {
    if section.kind.is_prewrapped() {
        format!("{}\n", section.content.trim())
    } else {
        format!("## {}\n{}\n", section.title, section.content.trim())
    }
}

/// Assemble header, sections in canonical order, and footer.
///
/// The sort is stable, so sections of the same kind keep their collection
/// order.
pub fn render(header: &str, sections: &[Section]) -> String {
    let mut ordered: Vec<&Section> = sections.iter().collect();
    ordered.sort_by_key(|s| order_index(s.kind));

    let mut parts: Vec<String> = vec![header.to_string(), String::new()];
    for section in ordered {
        parts.push(format_section(section));
    }
    parts.extend(FOOTER_LINES.iter().map(|line| line.to_string()));

    parts.join("\n").trim().to_string()
}

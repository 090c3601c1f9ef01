use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Project documents fed into the pack
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Paths are relative to the discovered project root. An empty
/// `session_notes_file` or `protocol_file` disables that section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "d_baseline_files")]
    pub baseline_files: Vec<String>,
    #[serde(default = "d_session_notes_file")]
    pub session_notes_file: String,
    #[serde(default = "d_80")]
    pub session_notes_tail_lines: usize,
    #[serde(default = "d_protocol_file")]
    pub protocol_file: String,
    #[serde(default = "d_120")]
    pub protocol_tail_lines: usize,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            baseline_files: d_baseline_files(),
            session_notes_file: d_session_notes_file(),
            session_notes_tail_lines: 80,
            protocol_file: d_protocol_file(),
            protocol_tail_lines: 120,
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_baseline_files() -> Vec<String> {
    vec!["docs/PROJECT_CONTEXT.md".into(), "docs/NOW.md".into()]
}
fn d_session_notes_file() -> String {
    "docs/SESSION_NOTES.md".into()
}
fn d_protocol_file() -> String {
    "docs/AGENT_SESSION_PROTOCOL.md".into()
}
fn d_80() -> usize {
    80
}
fn d_120() -> usize {
    120
}

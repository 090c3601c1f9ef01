use serde::Serialize;

use crate::estimate::estimate;

/// Sections at or above this priority get the larger trimming floor.
pub const HIGH_PRIORITY: u8 = 60;

/// What a section is. Drives its priority and where it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Instruction,
    /// Near-term focus document (`*NOW.md`).
    Focus,
    /// Design/background document.
    Background,
    SessionNotes,
    Protocol,
    Selection,
    Diff,
}

impl SectionKind {
    pub fn priority(self) -> u8 {
        match self {
            SectionKind::Instruction => 100,
            SectionKind::Selection | SectionKind::Diff => 90,
            SectionKind::Focus => 60,
            SectionKind::Background => 50,
            SectionKind::SessionNotes => 35,
            SectionKind::Protocol => 25,
        }
    }

    /// Selection and diff text already carry their own heading and fence.
    pub fn is_prewrapped(self) -> bool {
        matches!(self, SectionKind::Selection | SectionKind::Diff)
    }
}

/// How a file-backed section turns raw document text into content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// Summary region or full text, capped at this many units.
    Capped(usize),
    /// Summary region or the last this-many lines.
    Tail(usize),
}

/// Where a candidate section's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSource {
    Literal(String),
    FileBacked {
        /// Relative to the project root.
        path: String,
        extraction: Extraction,
    },
}

/// A section before its source has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub kind: SectionKind,
    pub priority: u8,
    pub source: SectionSource,
}

impl Candidate {
    pub fn literal(title: impl Into<String>, kind: SectionKind, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            priority: kind.priority(),
            source: SectionSource::Literal(text.into()),
        }
    }

    pub fn file_backed(
        title: impl Into<String>,
        kind: SectionKind,
        path: impl Into<String>,
        extraction: Extraction,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            priority: kind.priority(),
            source: SectionSource::FileBacked {
                path: path.into(),
                extraction,
            },
        }
    }
}

/// One titled, priority-tagged block of text in the pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub kind: SectionKind,
    pub priority: u8,
    pub content: String,
}

impl Section {
    pub fn units(&self) -> usize {
        estimate(&self.content)
    }

    /// A copy of this section carrying different content.
    pub fn with_content(&self, content: String) -> Section {
        Section {
            title: self.title.clone(),
            kind: self.kind,
            priority: self.priority,
            content,
        }
    }
}

use serde::Serialize;

use crate::section::{Section, SectionKind};

/// Per-section report within one pack build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub title: String,
    pub kind: SectionKind,
    pub priority: u8,
    /// Units after extraction, before budget trimming.
    pub raw_units: usize,
    /// Units actually rendered.
    pub injected_units: usize,
    /// True if budget trimming cut this section.
    pub trimmed: bool,
}

/// Full report of a pack build, printed by `handoff role --report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextReport {
    pub budget: usize,
    pub workable_budget: usize,
    pub raw_units: usize,
    pub injected_units: usize,
    /// Floors alone did not fit; the pack is best effort.
    pub over_budget: bool,
    pub sections: Vec<SectionReport>,
}

impl ContextReport {
    /// Compare sections before and after allocation (same order).
    pub fn from_allocation(
        budget: usize,
        workable_budget: usize,
        before: &[Section],
        after: &[Section],
    ) -> Self {
        let sections: Vec<SectionReport> = before
            .iter()
            .zip(after)
            .map(|(b, a)| SectionReport {
                title: a.title.clone(),
                kind: a.kind,
                priority: a.priority,
                raw_units: b.units(),
                injected_units: a.units(),
                trimmed: a.content != b.content,
            })
            .collect();

        let raw_units = sections.iter().map(|s| s.raw_units).sum();
        let injected_units: usize = sections.iter().map(|s| s.injected_units).sum();

        Self {
            budget,
            workable_budget,
            raw_units,
            injected_units,
            over_budget: injected_units > workable_budget,
            sections,
        }
    }

    pub fn trimmed_count(&self) -> usize {
        self.sections.iter().filter(|s| s.trimmed).count()
    }
}

use serde::Serialize;

/// Structured trace events emitted across all handoff crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ContextBuilt {
        budget: usize,
        workable_budget: usize,
        raw_units: usize,
        injected_units: usize,
        sections_included: usize,
        sections_trimmed: usize,
        over_budget: bool,
    },
    SectionTrimmed {
        title: String,
        priority: u8,
        from_units: usize,
        to_units: usize,
    },
    DocRead {
        path: String,
        raw_chars: usize,
        found: bool,
    },
    ConfigLoaded {
        path: Option<String>,
        source: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "hk_event");
    }
}

use hk_domain::config::Config;
use hk_domain::trace::TraceEvent;

use crate::budget;
use crate::collect::{self, DocSource, PackInputs};
use crate::render;
use crate::report::ContextReport;

/// Deterministic context pack builder.
///
/// Owns the resolved configuration; each `build` is a pure function of the
/// inputs and whatever `docs` returns.
pub struct ContextPackBuilder {
    config: Config,
}

impl ContextPackBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the context pack.
    ///
    /// Collects candidate sections, reads file-backed ones through `docs`,
    /// trims against the configured budget, and renders the result.
    ///
    /// Returns `(assembled_pack, report)`.
    pub fn build(&self, inputs: &PackInputs, docs: &dyn DocSource) -> (String, ContextReport) {
        let budget = self.config.context.budget;
        let workable = self.config.context.workable_budget();

        // ── 1. Collect and read ────────────────────────────────────
        let candidates = collect::collect(inputs, &self.config);
        let sections = collect::materialize(candidates, docs);

        // ── 2. Trim to budget ──────────────────────────────────────
        let allocated = budget::allocate(&sections, budget);
        let report = ContextReport::from_allocation(budget, workable, &sections, &allocated);

        // ── 3. Render ──────────────────────────────────────────────
        let header = render::render_header(inputs.role_reference.as_deref());
        let assembled = render::render(&header, &allocated);

        TraceEvent::ContextBuilt {
            budget,
            workable_budget: workable,
            raw_units: report.raw_units,
            injected_units: report.injected_units,
            sections_included: report.sections.len(),
            sections_trimmed: report.trimmed_count(),
            over_budget: report.over_budget,
        }
        .emit();

        (assembled, report)
    }
}

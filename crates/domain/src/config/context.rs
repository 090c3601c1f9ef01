use serde::{Deserialize, Serialize};

/// Units reserved from the configured budget for header/footer framing.
pub const FRAMING_RESERVE_UNITS: usize = 100;

/// The workable budget is never reduced below this many units.
pub const MIN_WORKABLE_UNITS: usize = 200;

/// Smallest per-document cap that can hold the truncation marker.
pub const MIN_CAP_UNITS: usize = 4;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Context pack budget and per-document caps
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Total unit allowance for the assembled pack (1 unit ≈ 4 chars).
    #[serde(default = "d_2200")]
    pub budget: usize,
    /// Cap applied to near-term focus documents (`*NOW.md`).
    #[serde(default = "d_450")]
    pub focus_max_units: usize,
    /// Cap applied to background documents. Larger than the focus cap:
    /// background docs are read less often but must stand alone.
    #[serde(default = "d_650")]
    pub background_max_units: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            budget: 2200,
            focus_max_units: 450,
            background_max_units: 650,
        }
    }
}

impl ContextConfig {
    /// Budget left for section bodies once framing is reserved.
    pub fn workable_budget(&self) -> usize {
        workable_budget(self.budget)
    }
}

/// `budget - FRAMING_RESERVE_UNITS`, floored at `MIN_WORKABLE_UNITS`.
pub fn workable_budget(budget: usize) -> usize {
    budget
        .saturating_sub(FRAMING_RESERVE_UNITS)
        .max(MIN_WORKABLE_UNITS)
}

// ── serde default helpers ───────────────────────────────────────────

fn d_2200() -> usize {
    2200
}
fn d_450() -> usize {
    450
}
fn d_650() -> usize {
    650
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workable_budget_reserves_framing() {
        assert_eq!(workable_budget(2200), 2100);
        assert_eq!(workable_budget(300), 200);
    }

    #[test]
    fn workable_budget_has_floor() {
        assert_eq!(workable_budget(250), MIN_WORKABLE_UNITS);
        assert_eq!(workable_budget(0), MIN_WORKABLE_UNITS);
    }

    #[test]
    fn deserialize_partial_fills_defaults() {
        let cfg: ContextConfig = toml::from_str("budget = 900").unwrap();
        assert_eq!(cfg.budget, 900);
        assert_eq!(cfg.focus_max_units, 450);
        assert_eq!(cfg.background_max_units, 650);
    }
}

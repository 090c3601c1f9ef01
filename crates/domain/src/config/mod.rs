mod context;
mod docs;
mod prompts;

pub use context::*;
pub use docs::*;
pub use prompts::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Resolved configuration. Built once at the process boundary and
/// handed to the pack builder by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub prompts: PromptsConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good. Nothing here is
    /// fatal to pack assembly; errors flag settings that make a section
    /// useless rather than settings that break the build.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.context.budget == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "context.budget".into(),
                message: "budget must be greater than 0".into(),
            });
        } else if self.context.budget < FRAMING_RESERVE_UNITS + MIN_WORKABLE_UNITS {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "context.budget".into(),
                message: format!(
                    "budget {} leaves less than {MIN_WORKABLE_UNITS} workable units; \
                     the floor of {MIN_WORKABLE_UNITS} applies",
                    self.context.budget
                ),
            });
        }

        for (field, cap) in [
            ("context.focus_max_units", self.context.focus_max_units),
            ("context.background_max_units", self.context.background_max_units),
        ] {
            if cap == 0 {
                errors.push(ConfigError {
                    severity: ConfigSeverity::Error,
                    field: field.into(),
                    message: "cap must be greater than 0".into(),
                });
            } else if cap < MIN_CAP_UNITS {
                errors.push(ConfigError {
                    severity: ConfigSeverity::Warning,
                    field: field.into(),
                    message: format!(
                        "cap {cap} cannot hold the truncation marker; \
                         oversized documents will exceed it (minimum {MIN_CAP_UNITS})"
                    ),
                });
            }
        }

        if self.docs.baseline_files.is_empty() {
            errors.push(ConfigError {
                severity: ConfigSeverity::Warning,
                field: "docs.baseline_files".into(),
                message: "no baseline documents configured".into(),
            });
        }

        let mut seen = HashSet::new();
        for (i, rel) in self.docs.baseline_files.iter().enumerate() {
            if rel.trim().is_empty() {
                errors.push(ConfigError {
                    severity: ConfigSeverity::Error,
                    field: format!("docs.baseline_files[{i}]"),
                    message: "path must not be empty".into(),
                });
            } else if !seen.insert(rel.as_str()) {
                errors.push(ConfigError {
                    severity: ConfigSeverity::Warning,
                    field: format!("docs.baseline_files[{i}]"),
                    message: format!("{rel} is listed more than once; it is included once"),
                });
            }
        }

        if !self.docs.session_notes_file.is_empty() && self.docs.session_notes_tail_lines == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "docs.session_notes_tail_lines".into(),
                message: "tail line count must be greater than 0".into(),
            });
        }
        if !self.docs.protocol_file.is_empty() && self.docs.protocol_tail_lines == 0 {
            errors.push(ConfigError {
                severity: ConfigSeverity::Error,
                field: "docs.protocol_tail_lines".into(),
                message: "tail line count must be greater than 0".into(),
            });
        }

        errors
    }
}

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use hk_domain::config::PromptsConfig;
use hk_domain::error::{Error, Result};

use crate::docs::read_text_lossy;

/// Directory holding repository agent files, relative to the project root.
pub const AGENTS_DIR: &str = ".github/agents";

const ARCHITECT: &str = include_str!("../templates/architect.md");
const CODER: &str = include_str!("../templates/coder.md");
const REVIEWER: &str = include_str!("../templates/reviewer.md");
const QA_TESTER: &str = include_str!("../templates/qa_tester.md");
const POLISH: &str = include_str!("../templates/polish.md");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Architect,
    Coder,
    Reviewer,
    #[value(name = "qa_tester")]
    QaTester,
    Qa,
    Polish,
}

impl Role {
    /// Name of the repository agent file stem (`<slug>.agent.md`).
    pub fn slug(self) -> &'static str {
        match self {
            Role::Architect => "architect",
            Role::Coder => "coder",
            Role::Reviewer => "reviewer",
            Role::QaTester | Role::Qa => "qa",
            Role::Polish => "polish",
        }
    }

    /// Name of the built-in template (`qa` shares the tester template).
    pub fn template_name(self) -> &'static str {
        match self {
            Role::Architect => "architect",
            Role::Coder => "coder",
            Role::Reviewer => "reviewer",
            Role::QaTester | Role::Qa => "qa_tester",
            Role::Polish => "polish",
        }
    }

    fn embedded_template(self) -> &'static str {
        match self {
            Role::Architect => ARCHITECT,
            Role::Coder => CODER,
            Role::Reviewer => REVIEWER,
            Role::QaTester | Role::Qa => QA_TESTER,
            Role::Polish => POLISH,
        }
    }
}

/// A resolved role prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePrompt {
    pub text: String,
    /// Repository agent file the prompt came from, if any.
    pub agent_path: Option<PathBuf>,
}

/// Resolve the prompt for `role`.
///
/// Order: `.github/agents/<slug>.agent.md` in the project, then
/// `prompts.templates_dir/<template>.md` when configured, then the
/// template compiled into the binary.
pub fn load_role_prompt(
    role: Role,
    project_root: &Path,
    config: &PromptsConfig,
) -> Result<RolePrompt> {
    let agent_path = project_root
        .join(AGENTS_DIR)
        .join(format!("{}.agent.md", role.slug()));
    if agent_path.is_file() {
        let raw = read_text_lossy(&agent_path)?;
        tracing::debug!(path = %agent_path.display(), "using repository agent file");
        return Ok(RolePrompt {
            text: strip_frontmatter(&raw).trim().to_string(),
            agent_path: Some(agent_path),
        });
    }

    if let Some(dir) = &config.templates_dir {
        let path = project_root
            .join(dir)
            .join(format!("{}.md", role.template_name()));
        if !path.is_file() {
            return Err(Error::TemplateNotFound {
                role: role.template_name().to_string(),
                path,
            });
        }
        let raw = read_text_lossy(&path)?;
        return Ok(RolePrompt {
            text: raw.trim().to_string(),
            agent_path: None,
        });
    }

    Ok(RolePrompt {
        text: role.embedded_template().trim().to_string(),
        agent_path: None,
    })
}

/// Drop a leading `---` YAML frontmatter block, if present and closed.
pub fn strip_frontmatter(text: &str) -> &str {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return text;
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end() == "---" {
            return &rest[offset..];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qa_roles_share_slug_and_template() {
        assert_eq!(Role::QaTester.slug(), "qa");
        assert_eq!(Role::Qa.slug(), "qa");
        assert_eq!(Role::Qa.template_name(), "qa_tester");
        assert_eq!(Role::Coder.slug(), "coder");
    }

    #[test]
    fn strips_closed_frontmatter() {
        let raw = "---\nname: coder\ndescription: x\n---\n# Coder\nWrite code.\n";
        assert_eq!(strip_frontmatter(raw), "# Coder\nWrite code.\n");
    }

    #[test]
    fn unclosed_frontmatter_is_kept() {
        let raw = "---\nname: coder\n# Coder\n";
        assert_eq!(strip_frontmatter(raw), raw);
    }

    #[test]
    fn text_without_frontmatter_untouched() {
        assert_eq!(strip_frontmatter("# Reviewer\n"), "# Reviewer\n");
    }

    #[test]
    fn embedded_template_used_without_agent_file() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = load_role_prompt(Role::Coder, dir.path(), &PromptsConfig::default()).unwrap();
        assert!(prompt.agent_path.is_none());
        assert_eq!(prompt.text, CODER.trim());
    }

    #[test]
    fn repository_agent_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let agents = dir.path().join(AGENTS_DIR);
        std::fs::create_dir_all(&agents).unwrap();
        std::fs::write(
            agents.join("qa.agent.md"),
            "---\ntools: [read]\n---\n\nRepo QA prompt\n",
        )
        .unwrap();

        let prompt =
            load_role_prompt(Role::QaTester, dir.path(), &PromptsConfig::default()).unwrap();
        assert_eq!(prompt.text, "Repo QA prompt");
        assert_eq!(prompt.agent_path, Some(agents.join("qa.agent.md")));
    }

    #[test]
    fn templates_dir_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("prompts")).unwrap();
        std::fs::write(dir.path().join("prompts/polish.md"), "Custom polish\n").unwrap();
        let config = PromptsConfig {
            templates_dir: Some(PathBuf::from("prompts")),
        };

        let prompt = load_role_prompt(Role::Polish, dir.path(), &config).unwrap();
        assert_eq!(prompt.text, "Custom polish");
    }

    #[test]
    fn missing_template_in_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = PromptsConfig {
            templates_dir: Some(PathBuf::from("prompts")),
        };

        let err = load_role_prompt(Role::Architect, dir.path(), &config).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound { ref role, .. } if role == "architect"));
    }
}

pub mod config;
pub mod role;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hk_domain::config::Config;
use hk_domain::error::Error;
use hk_domain::trace::TraceEvent;

use crate::prompts::Role;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "HANDOFF_CONFIG";
/// Per-project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "handoff.toml";

/// handoff: assemble a budgeted context pack for a coding-agent session.
#[derive(Debug, Parser)]
#[command(name = "handoff", version, about, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the role prompt followed by the context pack.
    Role(RoleArgs),
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Args)]
pub struct RoleArgs {
    /// Agent role to brief.
    #[arg(value_enum)]
    pub role: Role,
    /// What the agent should do this session.
    pub instruction: String,
    #[command(flatten)]
    pub location: LocationArgs,
    /// File holding the code selection to include.
    #[arg(long)]
    pub selection_file: Option<String>,
    /// Diff file to include, or `-` to read it from stdin.
    #[arg(long)]
    pub diff: Option<String>,
    /// Print the budget report as JSON on stderr.
    #[arg(long)]
    pub report: bool,
    /// Override `context.budget` for this run.
    #[arg(long)]
    pub budget: Option<usize>,
}

#[derive(Debug, Clone, Args)]
pub struct LocationArgs {
    /// Directory to start the project-root search from.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Config file (takes precedence over discovery).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Dump the resolved configuration (with defaults) as TOML.
    Show(LocationArgs),
    /// Parse the config file and report any issues.
    Validate(LocationArgs),
}

/// Rewrite `handoff <ROLE> ...` into `handoff role <ROLE> ...`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    use clap::ValueEnum;

    let mut args: Vec<OsString> = args.into_iter().collect();
    let is_role = args
        .get(1)
        .and_then(|a| a.to_str())
        .is_some_and(|a| Role::from_str(a, false).is_ok());
    if is_role {
        args.insert(1, OsString::from("role"));
    }
    args
}

// ── Config loading ───────────────────────────────────────────────────

/// Where a config file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub source: &'static str,
}

/// Pick the config file to load, first match wins:
/// `--config`, `$HANDOFF_CONFIG`, `<root>/handoff.toml`, then the user
/// config directory. `None` means built-in defaults.
///
/// An explicit `--config` that does not exist is an error; every other
/// candidate is skipped when absent.
pub fn resolve_config_path(
    project_root: &Path,
    explicit: Option<&Path>,
    env_path: Option<&str>,
    user_config_dir: Option<&Path>,
) -> Result<Option<ConfigLocation>, Error> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::ConfigRead {
                path: path.to_path_buf(),
                message: "file does not exist".into(),
            });
        }
        return Ok(Some(ConfigLocation {
            path: path.to_path_buf(),
            source: "flag",
        }));
    }

    if let Some(env) = env_path.filter(|p| !p.is_empty()) {
        let path = PathBuf::from(env);
        if path.is_file() {
            return Ok(Some(ConfigLocation { path, source: "env" }));
        }
        tracing::warn!(path = %path.display(), "{CONFIG_ENV} points to a missing file, ignoring");
    }

    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Ok(Some(ConfigLocation {
            path: project,
            source: "project",
        }));
    }

    if let Some(dir) = user_config_dir {
        let user = dir.join("handoff").join("config.toml");
        if user.is_file() {
            return Ok(Some(ConfigLocation {
                path: user,
                source: "user",
            }));
        }
    }

    Ok(None)
}

/// Parse a config file.
pub fn read_config_file(path: &Path) -> Result<Config, Error> {
    let raw = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&raw).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration for `project_root`. Returns the parsed
/// [`Config`] and the file it came from, if any.
///
/// Shared by `role` and the `config` subcommands.
pub fn load_config(
    project_root: &Path,
    explicit: Option<&Path>,
) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let env = std::env::var(CONFIG_ENV).ok();
    let user_dir = dirs::config_dir();
    let location = resolve_config_path(project_root, explicit, env.as_deref(), user_dir.as_deref())?;

    let (config, path, source) = match location {
        Some(loc) => (read_config_file(&loc.path)?, Some(loc.path), loc.source),
        None => (Config::default(), None, "defaults"),
    };

    TraceEvent::ConfigLoaded {
        path: path.as_ref().map(|p| p.display().to_string()),
        source: source.to_string(),
    }
    .emit();

    Ok((config, path))
}

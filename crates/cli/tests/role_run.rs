//! `handoff role` against a throwaway project on disk.

use std::path::{Path, PathBuf};

use hk_cli::cli::role::assemble;
use hk_cli::cli::{LocationArgs, RoleArgs};
use hk_cli::exit;
use hk_cli::prompts::Role;
use hk_domain::error::Error;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Project with the default document layout and an explicit empty config,
/// so the host's `HANDOFF_CONFIG` or user config never leaks in.
fn project() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "docs/PROJECT_CONTEXT.md", "# Context\nA CLI for handoffs.\n");
    write(dir.path(), "docs/NOW.md", "# Now\nWire the diff flag.\n");
    write(
        dir.path(),
        "docs/SESSION_NOTES.md",
        "old entry\n<!-- SUMMARY_START -->\nLast session added tracing.\n<!-- SUMMARY_END -->\n",
    );
    let config = dir.path().join("handoff.toml");
    std::fs::write(&config, "").unwrap();
    (dir, config)
}

fn args(root: &Path, config: &Path, role: Role) -> RoleArgs {
    RoleArgs {
        role,
        instruction: "Add the --diff flag".into(),
        location: LocationArgs {
            root: root.to_path_buf(),
            config: Some(config.to_path_buf()),
        },
        selection_file: None,
        diff: None,
        report: false,
        budget: None,
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Output assembly
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn prompt_precedes_pack() {
    let (dir, config) = project();
    let out = assemble(&args(dir.path(), &config, Role::Coder)).unwrap();

    assert!(out.text.starts_with("# Role: Coder"));
    let pack_start = out.text.find("## Instruction").unwrap();
    let focus = out.text.find("Wire the diff flag.").unwrap();
    let context = out.text.find("A CLI for handoffs.").unwrap();
    assert!(pack_start < focus && focus < context);
    assert!(out.text.contains("Last session added tracing."));
    assert!(!out.text.contains("old entry"));
    assert!(!out.report.over_budget);
}

#[test]
fn nested_start_directory_finds_root() {
    let (dir, config) = project();
    let nested = dir.path().join("src/deep");
    std::fs::create_dir_all(&nested).unwrap();

    let out = assemble(&args(&nested, &config, Role::Reviewer)).unwrap();
    assert_eq!(out.project_root, std::fs::canonicalize(dir.path()).unwrap());
    assert!(out.text.contains("Wire the diff flag."));
}

#[test]
fn repository_agent_file_is_referenced() {
    let (dir, config) = project();
    write(dir.path(), ".github/agents/qa.agent.md", "---\nname: qa\n---\nRepo QA.\n");

    let out = assemble(&args(dir.path(), &config, Role::Qa)).unwrap();
    assert!(out.text.starts_with("Repo QA.\n\n"));
    assert!(out.text.contains("Role reference file: "));
    assert!(out.text.contains("qa.agent.md"));
}

#[test]
fn selection_and_diff_are_included() {
    let (dir, config) = project();
    write(dir.path(), "patch.diff", "+let x = 1;\n");
    write(dir.path(), "snippet.rs", "fn main() {}\n");

    let mut run = args(dir.path(), &config, Role::Coder);
    run.diff = Some("patch.diff".into());
    run.selection_file = Some("snippet.rs".into());
    let out = assemble(&run).unwrap();

    assert!(out.text.contains("## Diff\n\n```\n+let x = 1;\n```"));
    assert!(out.text.contains("## Selection\n\n```\nfn main() {}\n```"));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Failure modes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn missing_diff_file_names_resolved_path() {
    let (dir, config) = project();
    let mut run = args(dir.path(), &config, Role::Coder);
    run.diff = Some("missing.diff".into());

    let err = assemble(&run).unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::MissingInput { label, path }) => {
            assert_eq!(label, "Diff");
            assert!(path.is_absolute());
            assert!(path.ends_with("missing.diff"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_diff_under_missing_root_exits_two() {
    let (dir, config) = project();
    let mut run = args(&dir.path().join("not/created"), &config, Role::Coder);
    run.diff = Some("../handoff-missing-input.diff".into());

    let err = assemble(&run).unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::MissingInput { path, .. }) => {
            assert!(path.is_absolute());
            assert!(!path.to_string_lossy().contains(".."));
            assert_eq!(
                path,
                &dir.path().parent().unwrap().join("handoff-missing-input.diff")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let (code, message) = exit::failure(&err);
    assert_eq!(code, exit::EXIT_MISSING_INPUT);
    assert!(message.ends_with(exit::DIFF_TIP));
}

#[test]
fn malformed_config_is_an_error() {
    let (dir, config) = project();
    std::fs::write(&config, "[context]\nbudget = \"lots\"\n").unwrap();

    let err = assemble(&args(dir.path(), &config, Role::Coder)).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::ConfigParse { .. })));
    assert_eq!(exit::failure(&err).0, exit::EXIT_FAILURE);
}

#[test]
fn budget_flag_overrides_config() {
    let (dir, config) = project();
    std::fs::write(&config, "[context]\nbudget = 5000\n").unwrap();

    let mut run = args(dir.path(), &config, Role::Coder);
    run.budget = Some(400);
    let out = assemble(&run).unwrap();
    assert_eq!(out.report.budget, 400);
    assert_eq!(out.report.workable_budget, 300);
}

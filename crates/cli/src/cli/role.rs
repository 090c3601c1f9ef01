use std::path::PathBuf;

use anyhow::Context;
use hk_contextpack::{ContextPackBuilder, ContextReport, PackInputs};

use crate::docs::DocReader;
use crate::inputs::read_optional_input;
use crate::project::find_project_root;
use crate::prompts::load_role_prompt;

use super::{load_config, RoleArgs};

/// Result of a `role` run, before printing.
#[derive(Debug)]
pub struct RoleOutput {
    pub text: String,
    pub report: ContextReport,
    pub project_root: PathBuf,
}

/// Assemble the role prompt and context pack for `args`.
pub fn assemble(args: &RoleArgs) -> anyhow::Result<RoleOutput> {
    let project_root = find_project_root(&args.location.root);
    let (mut config, _) = load_config(&project_root, args.location.config.as_deref())?;
    if let Some(budget) = args.budget {
        config.context.budget = budget;
    }

    let selection = read_optional_input(args.selection_file.as_deref(), &project_root, "Selection")?;
    let diff = read_optional_input(args.diff.as_deref(), &project_root, "Diff")?;

    let prompt = load_role_prompt(args.role, &project_root, &config.prompts)?;

    let inputs = PackInputs {
        instruction: args.instruction.clone(),
        selection,
        diff,
        role_reference: prompt
            .agent_path
            .as_ref()
            .map(|p| p.display().to_string()),
    };

    let reader = DocReader::new(project_root.clone());
    let builder = ContextPackBuilder::new(config);
    let (pack, report) = builder.build(&inputs, &reader);

    Ok(RoleOutput {
        text: format!("{}\n\n{}", prompt.text, pack),
        report,
        project_root,
    })
}

/// `handoff role`: print the assembled text on stdout.
pub fn run(args: &RoleArgs) -> anyhow::Result<()> {
    let output = assemble(args)?;

    if args.report {
        let json = serde_json::to_string_pretty(&output.report)
            .context("serializing context report")?;
        eprintln!("{json}");
    }

    println!("{}", output.text);
    Ok(())
}

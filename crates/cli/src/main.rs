use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hk_cli::cli::{self, Cli, Command, ConfigCommand, LocationArgs};
use hk_cli::exit;
use hk_cli::project::find_project_root;

fn main() -> ExitCode {
    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
    init_cli_tracing();

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(err) => {
            let (code, message) = exit::failure(&err);
            eprintln!("{message}");
            ExitCode::from(code)
        }
    }
}

fn dispatch(command: Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Role(args) => {
            cli::role::run(&args)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config(ConfigCommand::Validate(location)) => {
            let (config, label) = load_for(&location)?;
            if cli::config::validate(&config, &label) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Config(ConfigCommand::Show(location)) => {
            let (config, _) = load_for(&location)?;
            cli::config::show(&config)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            println!("handoff {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_for(location: &LocationArgs) -> anyhow::Result<(hk_domain::config::Config, String)> {
    let root = find_project_root(&location.root);
    let (config, path) = cli::load_config(&root, location.config.as_deref())?;
    let label = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".into());
    Ok((config, label))
}

fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

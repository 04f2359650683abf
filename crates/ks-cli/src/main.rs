//! ksonnet app metadata CLI
//!
//! Creates apps, locates the enclosing app root and lists components.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ComponentAction};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    tracing::debug!(?cli, "Parsed arguments");

    let cwd = working_dir(cli.dir.as_deref())?;
    match cli.command {
        Commands::Init { name, api_spec } => commands::run_init(&cwd, &name, &api_spec),
        Commands::Root => commands::run_root(&cwd),
        Commands::Component {
            action: ComponentAction::List { json },
        } => commands::run_component_list(&cwd, json),
    }
}

/// Install the fmt subscriber. `KS_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("KS_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

fn working_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    dunce::canonicalize(&dir).map_err(|e| {
        CliError::user(format!("Cannot use working directory '{}': {e}", dir.display()))
    })
}

//! Init command implementation
//!
//! Creates a new app on disk from a cluster spec source.

use std::path::Path;

use colored::Colorize;
use ks_fs::AbsPath;
use ks_meta::{ClusterSpec, Manager};

use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(cwd: &Path, name: &str, api_spec: &str) -> Result<()> {
    let root = AbsPath::new(cwd.join(name))?;
    let source = resolve_spec_source(cwd, api_spec)?;

    println!(
        "{} Creating app {} from {}...",
        "=>".blue().bold(),
        root.as_str().cyan(),
        source.yellow()
    );

    let fs = super::disk();
    let spec = ClusterSpec::parse(&source, fs.as_ref())?;
    let manager = Manager::init(root, &spec, fs)?;

    println!("{} App initialized at {}", "OK".green().bold(), manager.root());
    Ok(())
}

/// Make a relative `file:` source absolute against `cwd`.
///
/// Other schemes are passed through untouched and rejected by the parser.
pub fn resolve_spec_source(cwd: &Path, api_spec: &str) -> Result<String> {
    let Some(location) = api_spec.strip_prefix("file:") else {
        return Ok(api_spec.to_string());
    };
    if location.is_empty() {
        return Err(CliError::user("--api-spec 'file:' needs a path"));
    }
    let path = AbsPath::new(cwd.join(location))?;
    Ok(format!("file:{path}"))
}

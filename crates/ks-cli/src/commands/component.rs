//! Component command implementations

use std::path::Path;

use crate::error::Result;

/// List the component files of the enclosing app
pub fn run_component_list(cwd: &Path, json: bool) -> Result<()> {
    let manager = super::find_app(cwd)?;

    let mut paths = manager.component_paths()?;
    paths.sort();
    tracing::debug!(count = paths.len(), root = %manager.root(), "Listed components");

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for path in &paths {
            println!("{path}");
        }
    }
    Ok(())
}

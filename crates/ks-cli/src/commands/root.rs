//! Root command implementation

use std::path::Path;

use crate::error::Result;

/// Print the root of the enclosing app
pub fn run_root(cwd: &Path) -> Result<()> {
    let manager = super::find_app(cwd)?;
    println!("{}", manager.root());
    Ok(())
}

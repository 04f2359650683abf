//! Command implementations for ks-cli

pub mod component;
pub mod init;
pub mod root;

pub use component::run_component_list;
pub use init::run_init;
pub use root::run_root;

use std::path::Path;
use std::sync::Arc;

use ks_fs::{Filesystem, OsFs};
use ks_meta::Manager;

use crate::error::Result;

/// The real disk, shared by every manager a command creates.
pub(crate) fn disk() -> Arc<dyn Filesystem> {
    Arc::new(OsFs::new())
}

/// Locate the app enclosing `cwd`.
pub(crate) fn find_app(cwd: &Path) -> Result<Manager> {
    Ok(Manager::find(cwd, disk())?)
}

//! Reserved directory and file names of a ksonnet app.
//!
//! ```text
//! <root>/
//!   .ksonnet/
//!   lib/
//!   components/
//!   environments/
//!     default/
//!       schema.json
//!       k.libsonnet
//!       k8s.libsonnet
//!   vendor/
//! ```

/// Marker directory whose presence identifies an app root.
pub const KSONNET_DIR: &str = ".ksonnet";
pub const LIB_DIR: &str = "lib";
pub const COMPONENTS_DIR: &str = "components";
pub const ENVIRONMENTS_DIR: &str = "environments";
pub const VENDOR_DIR: &str = "vendor";

/// Environment created by `init`.
pub const DEFAULT_ENV_NAME: &str = "default";

pub const SCHEMA_FILENAME: &str = "schema.json";
pub const BASE_LIB_FILENAME: &str = "k.libsonnet";
pub const EXTENSIONS_LIB_FILENAME: &str = "k8s.libsonnet";

/// Directories under `components/` with this name are never listed.
pub const UNLISTED_DIR_NAME: &str = "doNotListMe";

/// Directories every app contains after `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceDir {
    /// The `.ksonnet` marker directory
    Ksonnet,
    /// Shared libraries
    Lib,
    /// Component sources
    Components,
    /// Environment definitions
    Environments,
    /// Vendored dependencies
    Vendor,
    /// The default environment, nested under `environments/`
    DefaultEnv,
}

impl WorkspaceDir {
    /// Creation order used by `init`; parents precede children.
    pub const ALL: [WorkspaceDir; 6] = [
        Self::Ksonnet,
        Self::Lib,
        Self::Components,
        Self::Environments,
        Self::Vendor,
        Self::DefaultEnv,
    ];

    /// Path relative to the app root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ksonnet => KSONNET_DIR,
            Self::Lib => LIB_DIR,
            Self::Components => COMPONENTS_DIR,
            Self::Environments => ENVIRONMENTS_DIR,
            Self::Vendor => VENDOR_DIR,
            Self::DefaultEnv => "environments/default",
        }
    }
}

impl std::fmt::Display for WorkspaceDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

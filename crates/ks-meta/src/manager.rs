//! The metadata manager bound to a single app root

use std::path::Path;
use std::sync::Arc;

use ks_fs::{AbsPath, Filesystem, walk_files};

use crate::error::abs_path;
use crate::layout::{
    BASE_LIB_FILENAME, COMPONENTS_DIR, ENVIRONMENTS_DIR, EXTENSIONS_LIB_FILENAME, KSONNET_DIR,
    SCHEMA_FILENAME, UNLISTED_DIR_NAME, WorkspaceDir,
};
use crate::{ClusterSpec, Error, Result, library};

/// Generated files of the default environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibPaths {
    /// Raw schema the app was generated against
    pub schema: AbsPath,
    /// Library generated from the schema
    pub base: AbsPath,
    /// User-editable extensions over the base library
    pub extensions: AbsPath,
}

/// Manages the metadata of one ksonnet app.
///
/// The filesystem handle is shared, never owned: several managers may run
/// against the same `MemFs` or the real disk at once. Nothing is cached, so
/// every call observes the current state of the filesystem.
#[derive(Debug, Clone)]
pub struct Manager {
    root: AbsPath,
    fs: Arc<dyn Filesystem>,
}

impl Manager {
    /// Create a new app at `root`.
    ///
    /// Fails with [`Error::AlreadyExists`] if a directory is already present at
    /// `root`; an existing app is never touched. Filesystem failures past that
    /// check are reported as [`Error::Init`] and whatever was created so far is
    /// left in place.
    pub fn init(root: AbsPath, spec: &ClusterSpec, fs: Arc<dyn Filesystem>) -> Result<Self> {
        let exists = fs.dir_exists(&root).map_err(|source| Error::Init {
            path: root.clone(),
            source,
        })?;
        if exists {
            return Err(Error::AlreadyExists { path: root });
        }

        tracing::debug!(root = %root, "Initializing app");
        let manager = Self { root, fs };
        manager.create_layout(spec).map_err(|source| Error::Init {
            path: manager.root.clone(),
            source,
        })?;
        Ok(manager)
    }

    /// Locate the app enclosing `current`.
    ///
    /// Starting from `current` (or its directory, if it is a file), each
    /// ancestor is checked for the `.ksonnet` marker until the filesystem root.
    pub fn find(current: impl AsRef<Path>, fs: Arc<dyn Filesystem>) -> Result<Self> {
        let start = abs_path(current)?;
        if !fs.exists(&start)? {
            return Err(Error::invalid_input(start.as_str(), "path does not exist"));
        }

        let first = if fs.dir_exists(&start)? {
            start.clone()
        } else {
            start.parent().unwrap_or_else(|| start.clone())
        };

        for candidate in first.ancestors() {
            if fs.dir_exists(&candidate.join(KSONNET_DIR))? {
                tracing::debug!(root = %candidate, from = %start, "Found app root");
                return Ok(Self {
                    root: candidate,
                    fs,
                });
            }
        }

        Err(Error::NotFound { path: start })
    }

    /// Absolute paths of every component file under `components/`.
    ///
    /// Directories named [`UNLISTED_DIR_NAME`] are skipped along with their
    /// contents. The order of the result is unspecified.
    pub fn component_paths(&self) -> Result<Vec<String>> {
        let files = walk_files(self.fs.as_ref(), &self.components_dir(), |entry| {
            entry.name() == UNLISTED_DIR_NAME
        })?;
        Ok(files.into_iter().map(String::from).collect())
    }

    pub fn root(&self) -> &AbsPath {
        &self.root
    }

    pub fn components_dir(&self) -> AbsPath {
        self.root.join(COMPONENTS_DIR)
    }

    pub fn environments_dir(&self) -> AbsPath {
        self.root.join(ENVIRONMENTS_DIR)
    }

    pub fn default_env_dir(&self) -> AbsPath {
        self.root.join(WorkspaceDir::DefaultEnv.as_str())
    }

    pub fn lib_paths(&self) -> LibPaths {
        let env_dir = self.default_env_dir();
        LibPaths {
            schema: env_dir.join(SCHEMA_FILENAME),
            base: env_dir.join(BASE_LIB_FILENAME),
            extensions: env_dir.join(EXTENSIONS_LIB_FILENAME),
        }
    }

    fn create_layout(&self, spec: &ClusterSpec) -> ks_fs::Result<()> {
        self.fs.create_dir_all(&self.root)?;
        for dir in WorkspaceDir::ALL {
            self.fs.create_dir_all(&self.root.join(dir.as_str()))?;
        }

        let paths = self.lib_paths();
        self.fs.write_file(&paths.schema, spec.raw_schema())?;
        self.fs.write_file(&paths.base, spec.generated_library())?;
        self.fs
            .write_file(&paths.extensions, library::extensions_library().as_bytes())?;
        tracing::debug!(env = %self.default_env_dir(), "Wrote default environment");
        Ok(())
    }
}

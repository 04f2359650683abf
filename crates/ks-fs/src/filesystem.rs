//! The filesystem seam every metadata operation is written against

use std::fmt;

use crate::{AbsPath, Result};

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symlink, FIFO, socket or device
    Other,
}

/// A single entry returned by [`Filesystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: AbsPath,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Final component of the entry path.
    pub fn name(&self) -> &str {
        self.path.file_name().unwrap_or_default()
    }
}

/// A virtualizable filesystem.
///
/// Implementations are shared between callers (`Arc<dyn Filesystem>`), so all
/// methods take `&self`. Paths are always absolute.
pub trait Filesystem: fmt::Debug + Send + Sync {
    /// Whether anything (file or directory) exists at `path`.
    fn exists(&self, path: &AbsPath) -> Result<bool>;

    /// Whether a directory exists at `path`.
    fn dir_exists(&self, path: &AbsPath) -> Result<bool>;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    fn create_dir_all(&self, path: &AbsPath) -> Result<()>;

    /// Create or truncate the file at `path` and write `contents` to it.
    ///
    /// The parent directory must already exist.
    fn write_file(&self, path: &AbsPath, contents: &[u8]) -> Result<()>;

    /// Read the whole file at `path`.
    fn read_file(&self, path: &AbsPath) -> Result<Vec<u8>>;

    /// List the immediate children of the directory at `path`, in no particular order.
    fn read_dir(&self, path: &AbsPath) -> Result<Vec<DirEntry>>;
}

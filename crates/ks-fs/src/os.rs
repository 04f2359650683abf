//! Real-disk filesystem backend

use std::fs;
use std::io::ErrorKind;

use crate::{AbsPath, DirEntry, EntryKind, Error, Filesystem, Result, io};

/// [`Filesystem`] backed by the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for OsFs {
    fn exists(&self, path: &AbsPath) -> Result<bool> {
        match fs::metadata(path.to_native()) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io("stat", path.to_native(), e)),
        }
    }

    fn dir_exists(&self, path: &AbsPath) -> Result<bool> {
        match fs::metadata(path.to_native()) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io("stat", path.to_native(), e)),
        }
    }

    fn create_dir_all(&self, path: &AbsPath) -> Result<()> {
        tracing::trace!(path = %path, "create_dir_all");
        fs::create_dir_all(path.to_native())
            .map_err(|e| Error::io("create directory", path.to_native(), e))
    }

    fn write_file(&self, path: &AbsPath, contents: &[u8]) -> Result<()> {
        tracing::trace!(path = %path, bytes = contents.len(), "write_file");
        io::write_atomic(path, contents)
    }

    fn read_file(&self, path: &AbsPath) -> Result<Vec<u8>> {
        fs::read(path.to_native()).map_err(|e| Error::io("read", path.to_native(), e))
    }

    fn read_dir(&self, path: &AbsPath) -> Result<Vec<DirEntry>> {
        let native = path.to_native();
        let mut entries = Vec::new();
        for entry in fs::read_dir(&native).map_err(|e| Error::io("list", &native, e))? {
            let entry = entry.map_err(|e| Error::io("list", &native, e))?;
            // Symlinks are not followed.
            let file_type = entry
                .file_type()
                .map_err(|e| Error::io("stat", entry.path(), e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(DirEntry {
                path: path.child(&entry.file_name().to_string_lossy()),
                kind,
            });
        }
        Ok(entries)
    }
}

//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{AbsPath, Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a reader never observes a partially
/// written file. The temp file lives next to the target to stay on the same
/// filesystem, which means the parent directory must already exist. Once the
/// temp file has been created it is removed on every failure path.
pub fn write_atomic(path: &AbsPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io("create", &native_path, e))?;

    let result = write_locked(temp_file, content, &native_path).and_then(|()| {
        fs::rename(&temp_path, &native_path).map_err(|e| Error::io("write", &native_path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Fill `file` under an exclusive lock, then close it.
fn write_locked(mut file: File, content: &[u8], target: &Path) -> Result<()> {
    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io("write", target, e))?;

    file.unlock().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn write_atomic_replaces_content_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = AbsPath::new(dir.path().join("schema.json")).unwrap();

        write_atomic(&target, b"first").unwrap();
        write_atomic(&target, b"second").unwrap();

        assert_eq!(fs::read(target.to_native()).unwrap(), b"second");
        assert!(temp_files(dir.path()).is_empty());
    }

    #[test]
    fn write_atomic_requires_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = AbsPath::new(dir.path().join("missing").join("k.libsonnet")).unwrap();

        let err = write_atomic(&target, b"{}").unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn failed_write_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a rename.
        let target = dir.path().join("components");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("app.jsonnet"), b"{}").unwrap();

        let result = write_atomic(&AbsPath::new(&target).unwrap(), b"{}");

        assert!(result.is_err());
        assert!(temp_files(dir.path()).is_empty());
        assert!(target.join("app.jsonnet").is_file());
    }
}

//! Recursive directory listing with subtree pruning

use crate::{AbsPath, DirEntry, EntryKind, Filesystem, Result};

/// Collect every regular file beneath `root`, depth-first.
///
/// `prune` is consulted for each directory before it is entered; returning
/// `true` skips that directory and everything below it. Entries of kind
/// [`EntryKind::Other`] are neither listed nor
/// entered. The order of the returned paths is unspecified.
pub fn walk_files<F>(fs: &dyn Filesystem, root: &AbsPath, prune: F) -> Result<Vec<AbsPath>>
where
    F: Fn(&DirEntry) -> bool,
{
    let mut files = Vec::new();
    let mut pending = vec![root.clone()];

    while let Some(dir) = pending.pop() {
        for entry in fs.read_dir(&dir)? {
            match entry.kind {
                EntryKind::Dir if prune(&entry) => {
                    tracing::trace!(path = %entry.path, "pruned");
                }
                EntryKind::Dir => pending.push(entry.path),
                EntryKind::File => files.push(entry.path),
                EntryKind::Other => {
                    tracing::trace!(path = %entry.path, "skipped special file");
                }
            }
        }
    }

    Ok(files)
}

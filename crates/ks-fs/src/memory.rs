//! In-memory filesystem backend

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{AbsPath, DirEntry, EntryKind, Error, Filesystem, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// [`Filesystem`] held entirely in memory.
///
/// Roots always exist. Every other directory has to be created explicitly
/// (or through [`Filesystem::create_dir_all`]) before files can be written in it.
#[derive(Debug, Default)]
pub struct MemFs {
    nodes: RwLock<BTreeMap<AbsPath, Node>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<AbsPath, Node>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<AbsPath, Node>> {
        self.nodes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

static ROOT_NODE: Node = Node::Dir;

fn lookup<'a>(nodes: &'a BTreeMap<AbsPath, Node>, path: &AbsPath) -> Option<&'a Node> {
    if path.is_root() {
        return Some(&ROOT_NODE);
    }
    nodes.get(path)
}

fn fail(op: &'static str, path: &AbsPath, kind: ErrorKind) -> Error {
    let message = match kind {
        ErrorKind::NotFound => "no such file or directory",
        ErrorKind::IsADirectory => "is a directory",
        ErrorKind::NotADirectory => "not a directory",
        _ => "operation failed",
    };
    Error::io(op, path.to_native(), std::io::Error::new(kind, message))
}

impl Filesystem for MemFs {
    fn exists(&self, path: &AbsPath) -> Result<bool> {
        Ok(lookup(&self.read(), path).is_some())
    }

    fn dir_exists(&self, path: &AbsPath) -> Result<bool> {
        Ok(matches!(lookup(&self.read(), path), Some(Node::Dir)))
    }

    fn create_dir_all(&self, path: &AbsPath) -> Result<()> {
        let mut nodes = self.write();
        let mut missing: Vec<AbsPath> = Vec::new();
        for ancestor in path.ancestors() {
            match lookup(&nodes, &ancestor) {
                Some(Node::Dir) => break,
                Some(Node::File(_)) => {
                    return Err(fail("create directory", &ancestor, ErrorKind::NotADirectory));
                }
                None => missing.push(ancestor),
            }
        }
        for dir in missing.into_iter().rev() {
            nodes.insert(dir, Node::Dir);
        }
        Ok(())
    }

    fn write_file(&self, path: &AbsPath, contents: &[u8]) -> Result<()> {
        let mut nodes = self.write();
        let Some(parent) = path.parent() else {
            return Err(fail("write", path, ErrorKind::IsADirectory));
        };
        match lookup(&nodes, &parent) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => return Err(fail("write", path, ErrorKind::NotADirectory)),
            None => return Err(fail("write", path, ErrorKind::NotFound)),
        }
        if let Some(Node::Dir) = nodes.get(path) {
            return Err(fail("write", path, ErrorKind::IsADirectory));
        }
        nodes.insert(path.clone(), Node::File(contents.to_vec()));
        Ok(())
    }

    fn read_file(&self, path: &AbsPath) -> Result<Vec<u8>> {
        match lookup(&self.read(), path) {
            Some(Node::File(bytes)) => Ok(bytes.clone()),
            Some(Node::Dir) => Err(fail("read", path, ErrorKind::IsADirectory)),
            None => Err(fail("read", path, ErrorKind::NotFound)),
        }
    }

    fn read_dir(&self, path: &AbsPath) -> Result<Vec<DirEntry>> {
        let nodes = self.read();
        match lookup(&nodes, path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => return Err(fail("list", path, ErrorKind::NotADirectory)),
            None => return Err(fail("list", path, ErrorKind::NotFound)),
        }
        let entries = nodes
            .range(path.descendants_bound()..)
            .take_while(|(child, _)| child.starts_with(path))
            .filter(|(child, _)| child.parent().as_ref() == Some(path))
            .map(|(child, node)| DirEntry {
                path: child.clone(),
                kind: match node {
                    Node::Dir => EntryKind::Dir,
                    Node::File(_) => EntryKind::File,
                },
            })
            .collect();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> AbsPath {
        AbsPath::new(s).unwrap()
    }

    #[test]
    fn root_always_exists() {
        let fs = MemFs::new();
        assert!(fs.dir_exists(&AbsPath::root()).unwrap());
        assert!(fs.read_dir(&AbsPath::root()).unwrap().is_empty());
    }

    #[test]
    fn create_dir_all_creates_every_ancestor() {
        let fs = MemFs::new();
        fs.create_dir_all(&p("/a/b/c")).unwrap();

        assert!(fs.dir_exists(&p("/a")).unwrap());
        assert!(fs.dir_exists(&p("/a/b")).unwrap());
        assert!(fs.dir_exists(&p("/a/b/c")).unwrap());
    }

    #[test]
    fn create_dir_all_through_a_file_fails() {
        let fs = MemFs::new();
        fs.write_file(&p("/a"), b"").unwrap();

        let err = fs.create_dir_all(&p("/a/b")).unwrap_err();
        assert_eq!(err.io_kind(), Some(ErrorKind::NotADirectory));
    }

    #[test]
    fn read_dir_lists_children_despite_neighbouring_siblings() {
        let fs = MemFs::new();
        for dir in ["/a/sub/deep", "/a-x", "/a.b", "/a0", "/b"] {
            fs.create_dir_all(&p(dir)).unwrap();
        }
        fs.write_file(&p("/a/top.jsonnet"), b"").unwrap();
        fs.write_file(&p("/a-x/other.jsonnet"), b"").unwrap();

        let mut names: Vec<String> = fs
            .read_dir(&p("/a"))
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, ["sub", "top.jsonnet"]);

        let mut top: Vec<String> = fs
            .read_dir(&AbsPath::root())
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        top.sort();
        assert_eq!(top, ["a", "a-x", "a.b", "a0", "b"]);
    }
}

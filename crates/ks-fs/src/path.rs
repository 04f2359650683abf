//! Normalized absolute path handling

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An absolute path normalized to forward slashes.
///
/// Runs of separators are collapsed, `.` segments are dropped and `..`
/// segments pop a level without ever escaping the root. Only a root (`/`, or
/// `C:/` on Windows) keeps a trailing separator, so two `AbsPath`s naming the
/// same location always compare equal.
///
/// A backslash is a separator only on Windows; elsewhere it is an ordinary
/// file-name character and is kept as is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl AbsPath {
    /// Parse and normalize an absolute path.
    ///
    /// Fails with [`Error::InvalidPath`] when the input is empty or relative.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let raw = path.as_ref().to_string_lossy();
        if raw.is_empty() {
            return Err(Error::InvalidPath {
                path: String::new(),
                reason: "path is empty",
            });
        }

        let unified = unify_separators(&raw);
        let Some(root_len) = root_len(&unified) else {
            return Err(Error::InvalidPath {
                path: raw.into_owned(),
                reason: "path is not absolute",
            });
        };

        Ok(Self {
            inner: collapse(&unified[..root_len], &unified[root_len..]),
        })
    }

    /// The filesystem root `/`.
    pub fn root() -> Self {
        Self {
            inner: "/".to_string(),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a relative segment.
    ///
    /// The segment may contain several components; it is normalized together
    /// with `self`, so a leading separator in `segment` does not reset the path.
    pub fn join(&self, segment: impl AsRef<str>) -> Self {
        let root_len = self.root_len();
        let rest = format!(
            "{}/{}",
            &self.inner[root_len..],
            unify_separators(segment.as_ref())
        );
        Self {
            inner: collapse(&self.inner[..root_len], &rest),
        }
    }

    /// Append a single entry name exactly as a directory listing reported it.
    ///
    /// Unlike [`join`](Self::join), `name` is not split or normalized, so a
    /// file literally named `..\x` on Unix stays one component. `name` must
    /// not contain `/` and must not be `.` or `..`.
    pub fn child(&self, name: &str) -> Self {
        debug_assert!(
            !name.is_empty() && !name.contains('/') && name != "." && name != "..",
            "not a single path component: {name:?}"
        );
        let mut inner = String::with_capacity(self.inner.len() + name.len() + 1);
        inner.push_str(&self.inner);
        if !self.is_root() {
            inner.push('/');
        }
        inner.push_str(name);
        Self { inner }
    }

    /// Whether this path is a filesystem root.
    pub fn is_root(&self) -> bool {
        self.inner.len() == self.root_len()
    }

    /// Get the parent directory, or `None` for a root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let root_len = self.root_len();
        let idx = self.inner.rfind('/')?;
        let end = if idx < root_len { root_len } else { idx };
        Some(Self {
            inner: self.inner[..end].to_string(),
        })
    }

    /// Iterate over this path and each of its ancestors, ending at the root.
    pub fn ancestors(&self) -> impl Iterator<Item = AbsPath> {
        std::iter::successors(Some(self.clone()), AbsPath::parent)
    }

    /// Get the final component, or `None` for a root.
    pub fn file_name(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.inner.rsplit('/').next()
    }

    /// Whether `self` is `other` or lies beneath it.
    pub fn starts_with(&self, other: &AbsPath) -> bool {
        if other.is_root() {
            return self.inner.starts_with(&other.inner);
        }
        self.inner == other.inner
            || (self.inner.starts_with(&other.inner)
                && self.inner.as_bytes().get(other.inner.len()) == Some(&b'/'))
    }

    /// Lower bound, in `Ord` order, of every strict descendant of `self`.
    ///
    /// Descendants sort contiguously from this bound, which lets ordered maps
    /// keyed by `AbsPath` visit a subtree with a range scan. The value is not a
    /// normalized path and must only be used for comparisons.
    pub(crate) fn descendants_bound(&self) -> AbsPath {
        if self.is_root() {
            return self.clone();
        }
        Self {
            inner: format!("{}/", self.inner),
        }
    }

    fn root_len(&self) -> usize {
        root_len(&self.inner).unwrap_or(0)
    }
}

fn unify_separators(path: &str) -> Cow<'_, str> {
    if cfg!(windows) {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Length of the root prefix (`/`, or `X:/` on Windows) of a forward-slash path.
fn root_len(path: &str) -> Option<usize> {
    if path.starts_with('/') {
        return Some(1);
    }
    let bytes = path.as_bytes();
    if cfg!(windows)
        && bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && bytes[2] == b'/'
    {
        return Some(3);
    }
    None
}

fn collapse(root: &str, rest: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    let mut out = String::with_capacity(root.len() + rest.len());
    out.push_str(root);
    out.push_str(&segments.join("/"));
    out
}

impl AsRef<Path> for AbsPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for AbsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl TryFrom<String> for AbsPath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl From<AbsPath> for String {
    fn from(p: AbsPath) -> Self {
        p.inner
    }
}

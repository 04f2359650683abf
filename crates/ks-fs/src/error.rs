//! Error types for ks-fs

use std::path::PathBuf;

/// Result type for ks-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ks-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to {op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Lock acquisition failed for '{path}'")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

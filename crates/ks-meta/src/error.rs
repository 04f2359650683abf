//! Error types for ks-meta

use ks_fs::AbsPath;

/// Result type for ks-meta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ks-meta operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `init` target already exists
    #[error("Could not create app; directory '{path}' already exists")]
    AlreadyExists { path: AbsPath },

    /// No app root above the starting path
    #[error("No ksonnet app found in '{path}' or any of its parent directories")]
    NotFound { path: AbsPath },

    /// Empty, relative or nonexistent starting path
    #[error("Invalid path '{path}': {reason}")]
    InvalidInput { path: String, reason: String },

    /// Filesystem failure while laying out a new app
    #[error("Failed to initialize app at '{path}': {source}")]
    Init {
        path: AbsPath,
        #[source]
        source: ks_fs::Error,
    },

    #[error("Unsupported spec source '{source_ref}'; expected 'file:<path>'")]
    UnsupportedSpecSource { source_ref: String },

    #[error("Failed to parse cluster spec from '{source_ref}': {message}")]
    SpecParse { source_ref: String, message: String },

    /// Filesystem error from ks-fs
    #[error(transparent)]
    Fs(#[from] ks_fs::Error),
}

impl Error {
    pub(crate) fn invalid_input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Parse a caller-supplied path, reporting bad input as [`Error::InvalidInput`].
pub(crate) fn abs_path(raw: impl AsRef<std::path::Path>) -> Result<AbsPath> {
    AbsPath::new(raw).map_err(|e| match e {
        ks_fs::Error::InvalidPath { path, reason } => Error::invalid_input(path, reason),
        other => Error::Fs(other),
    })
}

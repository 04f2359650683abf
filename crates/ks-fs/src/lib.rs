//! Filesystem abstraction for ksonnet app metadata
//!
//! Provides a normalized absolute path type, a pluggable [`Filesystem`]
//! with real-disk and in-memory backends, and a pruning directory walk.

pub mod error;
pub mod filesystem;
pub mod io;
pub mod memory;
pub mod os;
pub mod path;
pub mod walk;

pub use error::{Error, Result};
pub use filesystem::{DirEntry, EntryKind, Filesystem};
pub use memory::MemFs;
pub use os::OsFs;
pub use path::AbsPath;
pub use walk::walk_files;

//! Metadata management for ksonnet apps.
//!
//! A [`Manager`] is bound to one app root. It is obtained either by creating
//! a fresh app with [`Manager::init`] or by locating an existing one from a
//! nested path with [`Manager::find`].

pub mod error;
pub mod layout;
pub mod library;
pub mod manager;
pub mod spec;

pub use error::{Error, Result};
pub use layout::WorkspaceDir;
pub use manager::{LibPaths, Manager};
pub use spec::ClusterSpec;

//! Shared test utilities for the ks workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`schema`]: the blank swagger document and the library generated from it
//! - [`sandbox`]: [`Sandbox`](sandbox::Sandbox), a scratch area on an in-memory or real filesystem

pub mod sandbox;
pub mod schema;

//! Cluster specification: the schema an app is generated against

use std::collections::BTreeMap;

use ks_fs::Filesystem;
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::abs_path;
use crate::{Error, Result, library};

const FILE_SCHEME: &str = "file:";

/// The raw schema document and the library generated from it.
///
/// Both documents are persisted verbatim by [`Manager::init`](crate::Manager::init).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSpec {
    raw_schema: Vec<u8>,
    generated_library: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    info: SchemaInfo,
    #[serde(default)]
    definitions: BTreeMap<String, IgnoredAny>,
}

#[derive(Debug, Default, Deserialize)]
struct SchemaInfo {
    version: Option<String>,
}

impl ClusterSpec {
    /// Build a spec from documents produced elsewhere.
    pub fn from_parts(raw_schema: impl Into<Vec<u8>>, generated_library: impl Into<Vec<u8>>) -> Self {
        Self {
            raw_schema: raw_schema.into(),
            generated_library: generated_library.into(),
        }
    }

    /// Load a spec from a source descriptor such as `file:/path/swagger.json`.
    ///
    /// Only the `file:` scheme is understood; the file is read through `fs`.
    pub fn parse(source: &str, fs: &dyn Filesystem) -> Result<Self> {
        let Some(location) = source.strip_prefix(FILE_SCHEME) else {
            return Err(Error::UnsupportedSpecSource {
                source_ref: source.to_string(),
            });
        };
        let path = abs_path(location)?;

        tracing::debug!(path = %path, "Reading cluster spec");
        let raw_schema = fs.read_file(&path)?;

        let document: SchemaDocument =
            serde_json::from_slice(&raw_schema).map_err(|e| Error::SpecParse {
                source_ref: source.to_string(),
                message: e.to_string(),
            })?;
        let version = document.info.version.as_deref().unwrap_or("unknown");
        let generated_library =
            library::base_library(version, document.definitions.keys().map(String::as_str));

        Ok(Self {
            raw_schema,
            generated_library: generated_library.into_bytes(),
        })
    }

    pub fn raw_schema(&self) -> &[u8] {
        &self.raw_schema
    }

    pub fn generated_library(&self) -> &[u8] {
        &self.generated_library
    }
}

//! Blank swagger fixture.

/// A swagger document with no paths and no definitions.
pub const BLANK_SWAGGER: &str = r#"{
  "swagger": "2.0",
  "info": {
   "title": "Kubernetes",
   "version": "v1.7.0"
  },
  "paths": {
  },
  "definitions": {
  }
}"#;

/// Base library generated from [`BLANK_SWAGGER`].
pub const BLANK_K8S_LIB: &str = "// AUTOGENERATED from the Kubernetes OpenAPI specification. DO NOT MODIFY.
// Kubernetes version: v1.7.0

{
  local hidden = {
  },
}
";

/// File name the fixture is stored under inside a sandbox.
pub const BLANK_SWAGGER_FILE: &str = "blankSwagger.json";

//! Jsonnet library documents written into the default environment

use std::fmt::Write;

/// Header line of every generated base library.
pub const BASE_LIB_BANNER: &str =
    "// AUTOGENERATED from the Kubernetes OpenAPI specification. DO NOT MODIFY.";

/// Render the base library for a schema at `version` declaring `definitions`.
///
/// Definitions are emitted in iteration order; callers pass them sorted so the
/// output is stable for a given schema.
pub fn base_library<'a>(version: &str, definitions: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    out.push_str(BASE_LIB_BANNER);
    out.push('\n');
    let _ = writeln!(out, "// Kubernetes version: {version}");
    out.push('\n');
    out.push_str("{\n");
    out.push_str("  local hidden = {\n");
    for name in definitions {
        let _ = writeln!(out, "    {}: {{}},", json_string(name));
    }
    out.push_str("  },\n");
    out.push_str("}\n");
    out
}

/// Render the user-editable extensions library layered over `k.libsonnet`.
///
/// The header records the generating tool version, so apps created by
/// different releases may differ. The document is never empty.
pub fn extensions_library() -> String {
    format!(
        "// Extensions to the generated Kubernetes library.\n\
         // Generated by ks {}.\n\
         \n\
         local k = import \"{}\";\n\
         \n\
         k + {{\n\
         }}\n",
        env!("CARGO_PKG_VERSION"),
        crate::layout::BASE_LIB_FILENAME,
    )
}

fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

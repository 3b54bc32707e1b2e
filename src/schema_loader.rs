//! JSON Schema loading for the natives pack manifest.
//!
//! The manifest schema ships inside the crate so `natives-pack` works from
//! any directory; callers may point at an on-disk copy instead. The
//! `schema_version` const embedded in the schema is the version the manifest
//! must declare.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

pub(crate) const BUNDLED_MANIFEST_SCHEMA: &str =
    include_str!("../schema/natives_manifest.schema.json");

const SCHEMA_VERSION_POINTER: &str = "/properties/schema_version/const";

/// Result of loading and compiling a JSON Schema.
pub(crate) struct SchemaLoadResult {
    pub schema_version: String,
    pub compiled: JSONSchema,
}

impl SchemaLoadResult {
    /// Validate `value`, folding every schema violation into one error.
    pub fn validate(&self, value: &Value, label: &str) -> Result<()> {
        if let Err(errors) = self.compiled.validate(value) {
            let details = errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("{label} failed schema validation:\n{details}");
        }
        Ok(())
    }
}

/// Load the manifest schema from `path`, or the bundled copy when `None`.
pub(crate) fn load_manifest_schema(path: Option<&Path>) -> Result<SchemaLoadResult> {
    let (schema, origin) = match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening schema {}", path.display()))?;
            let value: Value = serde_json::from_reader(file)
                .with_context(|| format!("parsing schema {}", path.display()))?;
            (value, path.display().to_string())
        }
        None => {
            let value: Value = serde_json::from_str(BUNDLED_MANIFEST_SCHEMA)
                .context("parsing bundled manifest schema")?;
            (value, "bundled manifest schema".to_string())
        }
    };
    compile_schema(&schema, &origin)
}

fn compile_schema(schema: &Value, origin: &str) -> Result<SchemaLoadResult> {
    let schema_version = extract_schema_version(schema)
        .ok_or_else(|| anyhow!("{origin} is missing a schema_version const"))?;
    let compiled =
        JSONSchema::compile(schema).map_err(|err| anyhow!("compiling {origin}: {err}"))?;
    Ok(SchemaLoadResult {
        schema_version,
        compiled,
    })
}

fn extract_schema_version(schema: &Value) -> Option<String> {
    let version = schema.pointer(SCHEMA_VERSION_POINTER).and_then(Value::as_str)?;
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        Some(version.to_string())
    } else {
        None
    }
}

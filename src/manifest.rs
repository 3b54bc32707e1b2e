//! Pack manifest: the JSON description `natives-pack` turns into a blob.
//!
//! A manifest names every builtin script per blob section, debugger scripts
//! first, each with either a `path` (relative to the manifest's directory) or
//! an inline `source`. Manifests are validated against the bundled schema
//! before deserialization. Name uniqueness is enforced here, on the build
//! side, because the runtime lookup relies on it without checking.

use crate::catalog::NativeCategory;
use crate::loader::BLOB_SECTIONS;
use crate::schema_loader::load_manifest_schema;
use crate::writer::{BlobWriter, SectionSources};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct NativesManifest {
    pub schema_version: String,
    pub sections: ManifestSections,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ManifestSections {
    pub core: ManifestSection,
    pub experimental: ManifestSection,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ManifestSection {
    #[serde(default)]
    pub debugger: Vec<ManifestScript>,
    #[serde(default)]
    pub library: Vec<ManifestScript>,
}

#[derive(Clone, Debug, Deserialize)]
/// One script: exactly one of `path` or `source` is set.
pub struct ManifestScript {
    pub name: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub source: Option<String>,
}

impl NativesManifest {
    /// Parse and validate a manifest from a JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let schema = load_manifest_schema(None)?;
        schema.validate(&value, "natives manifest")?;

        let declared = value
            .get("schema_version")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if declared != schema.schema_version {
            bail!(
                "manifest schema_version '{}' does not match expected '{}'",
                declared,
                schema.schema_version
            );
        }

        let manifest: NativesManifest =
            serde_json::from_value(value).context("deserializing natives manifest")?;
        Ok(manifest)
    }

    pub fn section(&self, category: NativeCategory) -> Option<&ManifestSection> {
        match category {
            NativeCategory::Core => Some(&self.sections.core),
            NativeCategory::Experimental => Some(&self.sections.experimental),
            NativeCategory::HostTool | NativeCategory::Test => None,
        }
    }

    /// Read every script, returning one `SectionSources` per blob section in
    /// encoding order.
    pub fn resolve(&self, base_dir: &Path) -> Result<Vec<SectionSources>> {
        BLOB_SECTIONS
            .into_iter()
            .map(|category| {
                let section = self
                    .section(category)
                    .with_context(|| format!("manifest has no {category} section"))?;
                resolve_section(category, section, base_dir)
            })
            .collect()
    }
}

/// Load and validate a manifest file.
pub fn load_manifest(path: &Path) -> Result<NativesManifest> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading manifest {}", path.display()))?;
    let value: Value = serde_json::from_str(&data)
        .with_context(|| format!("parsing manifest {}", path.display()))?;
    NativesManifest::from_value(value).with_context(|| format!("loading {}", path.display()))
}

/// Encode resolved sections, in `BLOB_SECTIONS` order, into a natives blob.
pub fn encode_sections(sections: &[SectionSources]) -> Result<Vec<u8>> {
    if sections.len() != BLOB_SECTIONS.len() {
        bail!(
            "a natives blob holds {} sections, got {}",
            BLOB_SECTIONS.len(),
            sections.len()
        );
    }
    let mut writer = BlobWriter::new();
    for (category, section) in BLOB_SECTIONS.into_iter().zip(sections) {
        writer
            .write_section(section)
            .with_context(|| format!("encoding {category} section"))?;
    }
    Ok(writer.finish())
}

/// Load the manifest at `path`, read its scripts, and produce the blob bytes.
pub fn pack_manifest(path: &Path) -> Result<Vec<u8>> {
    let manifest = load_manifest(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let sections = manifest.resolve(base_dir)?;
    encode_sections(&sections)
}

fn resolve_section(
    category: NativeCategory,
    section: &ManifestSection,
    base_dir: &Path,
) -> Result<SectionSources> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for script in section.debugger.iter().chain(&section.library) {
        if script.name.trim().is_empty() {
            bail!("{category} section contains a script with an empty name");
        }
        if !seen.insert(script.name.as_str()) {
            bail!("duplicate script name '{}' in {category} section", script.name);
        }
    }

    let mut sources = SectionSources::default();
    for script in &section.debugger {
        sources.push_debugger(script.name.as_str(), read_script(script, base_dir)?);
    }
    for script in &section.library {
        sources.push_library(script.name.as_str(), read_script(script, base_dir)?);
    }
    Ok(sources)
}

fn read_script(script: &ManifestScript, base_dir: &Path) -> Result<Vec<u8>> {
    match (&script.path, &script.source) {
        (Some(path), None) => {
            let resolved = if path.is_absolute() {
                path.clone()
            } else {
                base_dir.join(path)
            };
            fs::read(&resolved).with_context(|| {
                format!("reading script '{}' from {}", script.name, resolved.display())
            })
        }
        (None, Some(source)) => Ok(source.clone().into_bytes()),
        _ => bail!(
            "script '{}' must set exactly one of 'path' or 'source'",
            script.name
        ),
    }
}

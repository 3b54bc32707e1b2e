//! Serializable overview of installed catalogs, as printed by `natives-dump`.

use crate::catalog::identity::{NativeCategory, ScriptKind};
use crate::catalog::model::ScriptCatalog;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub category: NativeCategory,
    pub debugger_count: usize,
    pub library_count: usize,
    pub entries: Vec<EntrySummary>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// One entry; names that are not valid UTF-8 are rendered lossily.
pub struct EntrySummary {
    pub index: usize,
    pub name: String,
    pub kind: ScriptKind,
    pub source_len: usize,
}

impl CatalogSummary {
    pub fn new(category: NativeCategory, catalog: &ScriptCatalog<'_>) -> Self {
        let entries = catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntrySummary {
                index,
                name: String::from_utf8_lossy(entry.name).into_owned(),
                kind: if index < catalog.debugger_entry_count() {
                    ScriptKind::Debugger
                } else {
                    ScriptKind::Library
                },
                source_len: entry.source.len(),
            })
            .collect();
        Self {
            category,
            debugger_count: catalog.debugger_entry_count(),
            library_count: catalog.library_entry_count(),
            entries,
        }
    }
}

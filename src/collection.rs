//! Category-polymorphic accessors over installed natives.
//!
//! This is the surface the rest of the runtime calls. `NativesCollection`
//! binds a registry and a category; the free functions bind the process-wide
//! registry. Every call forwards to the installed `ScriptCatalog` and fails
//! fatally when the category was never installed.

use crate::catalog::{NativeCategory, NativesRegistry, ScriptCatalog, natives};
use crate::error::{NativesError, fatal};

#[derive(Clone, Copy, Debug)]
pub struct NativesCollection<'r, 'a> {
    registry: &'r NativesRegistry<'a>,
    category: NativeCategory,
}

impl NativesCollection<'static, 'static> {
    /// Collection backed by the process-wide registry.
    pub fn global(category: NativeCategory) -> Self {
        Self::new(natives(), category)
    }
}

impl<'r, 'a> NativesCollection<'r, 'a> {
    pub fn new(registry: &'r NativesRegistry<'a>, category: NativeCategory) -> Self {
        Self { registry, category }
    }

    pub fn category(&self) -> NativeCategory {
        self.category
    }

    #[track_caller]
    fn catalog(&self) -> &'r ScriptCatalog<'a> {
        self.registry.get(self.category)
    }

    #[track_caller]
    pub fn builtins_count(&self) -> usize {
        self.catalog().entry_count()
    }

    #[track_caller]
    pub fn debugger_count(&self) -> usize {
        self.catalog().debugger_entry_count()
    }

    #[track_caller]
    pub fn index_of(&self, name: &[u8]) -> usize {
        self.catalog().find_index(name)
    }

    #[track_caller]
    pub fn script_name(&self, index: usize) -> &'a [u8] {
        self.catalog().name(index)
    }

    #[track_caller]
    pub fn raw_script_source(&self, index: usize) -> &'a [u8] {
        self.catalog().source(index)
    }

    /// Total size of the uncompressed sources. Only meaningful for
    /// compressed embedded natives, so always fatal here.
    #[track_caller]
    pub fn raw_scripts_size(&self) -> usize {
        fatal(NativesError::Unsupported("raw_scripts_size"))
    }

    /// Compressed source bundle. Always fatal for the blob-backed store.
    #[track_caller]
    pub fn scripts_source(&self) -> &'a [u8] {
        fatal(NativesError::Unsupported("scripts_source"))
    }

    /// Sources arrive only through the blob loader; always fatal.
    #[track_caller]
    pub fn set_raw_scripts_source(&self, _raw_source: &[u8]) {
        fatal(NativesError::Unsupported("set_raw_scripts_source"))
    }
}

#[track_caller]
pub fn builtins_count(category: NativeCategory) -> usize {
    NativesCollection::global(category).builtins_count()
}

#[track_caller]
pub fn debugger_count(category: NativeCategory) -> usize {
    NativesCollection::global(category).debugger_count()
}

#[track_caller]
pub fn index_of(category: NativeCategory, name: &[u8]) -> usize {
    NativesCollection::global(category).index_of(name)
}

#[track_caller]
pub fn script_name(category: NativeCategory, index: usize) -> &'static [u8] {
    NativesCollection::global(category).script_name(index)
}

#[track_caller]
pub fn raw_script_source(category: NativeCategory, index: usize) -> &'static [u8] {
    NativesCollection::global(category).raw_script_source(index)
}

#[track_caller]
pub fn raw_scripts_size(category: NativeCategory) -> usize {
    NativesCollection::global(category).raw_scripts_size()
}

#[track_caller]
pub fn scripts_source(category: NativeCategory) -> &'static [u8] {
    NativesCollection::global(category).scripts_source()
}

#[track_caller]
pub fn set_raw_scripts_source(category: NativeCategory, raw_source: &[u8]) {
    NativesCollection::global(category).set_raw_scripts_source(raw_source)
}

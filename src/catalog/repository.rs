//! Category-keyed, set-once store for decoded natives catalogs.
//!
//! Each category owns one slot. A slot is filled at most once during
//! bootstrap and never cleared; reads before the fill, and second fills, are
//! programming errors. `natives()` is the process-wide instance the accessor
//! façade reads from; callers that want an isolated store construct their
//! own `NativesRegistry` and pass it around.

use crate::catalog::identity::NativeCategory;
use crate::catalog::model::ScriptCatalog;
use crate::error::{NativesError, or_fatal};
use std::sync::OnceLock;

static NATIVES: NativesRegistry<'static> = NativesRegistry::new();

/// The registry shared by the whole process.
///
/// Catalogs installed here borrow from `'static` blob memory, typically
/// `include_bytes!` data or a buffer the embedder leaked on purpose.
pub fn natives() -> &'static NativesRegistry<'static> {
    &NATIVES
}

#[derive(Debug)]
pub struct NativesRegistry<'a> {
    slots: [OnceLock<ScriptCatalog<'a>>; NativeCategory::COUNT],
}

impl<'a> Default for NativesRegistry<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> NativesRegistry<'a> {
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; NativeCategory::COUNT],
        }
    }

    pub fn try_set(
        &self,
        category: NativeCategory,
        catalog: ScriptCatalog<'a>,
    ) -> Result<(), NativesError> {
        let entries = catalog.entry_count();
        self.slots[category.slot()]
            .set(catalog)
            .map_err(|_| NativesError::AlreadyInstalled(category))?;
        log::info!("installed {entries} {category} natives");
        Ok(())
    }

    /// Install `catalog` for `category`. Installing twice is fatal.
    #[track_caller]
    pub fn set(&self, category: NativeCategory, catalog: ScriptCatalog<'a>) {
        or_fatal(self.try_set(category, catalog))
    }

    pub fn try_get(&self, category: NativeCategory) -> Result<&ScriptCatalog<'a>, NativesError> {
        self.slots[category.slot()]
            .get()
            .ok_or(NativesError::NotInstalled(category))
    }

    /// Catalog installed for `category`. Reading before install is fatal.
    #[track_caller]
    pub fn get(&self, category: NativeCategory) -> &ScriptCatalog<'a> {
        or_fatal(self.try_get(category))
    }

    pub fn is_installed(&self, category: NativeCategory) -> bool {
        self.slots[category.slot()].get().is_some()
    }

    /// Installed catalogs in category order.
    pub fn installed(&self) -> impl Iterator<Item = (NativeCategory, &ScriptCatalog<'a>)> {
        NativeCategory::ALL
            .into_iter()
            .filter_map(|category| self.try_get(category).ok().map(|catalog| (category, catalog)))
    }
}

//! Blob-backed store for a runtime's builtin script sources ("natives").
//!
//! The embedder hands over one pre-built blob holding two encoded sections,
//! Core then Experimental. `load_from_blob` decodes both into
//! [`ScriptCatalog`]s and installs them into the process-wide
//! [`NativesRegistry`]; the accessor functions in [`collection`] then read
//! them by category from anywhere in the runtime.
//!
//! Catalog entries are views into the blob, never copies, so the blob must
//! outlive every catalog decoded from it. For the process-wide registry that
//! means `'static` bytes. Malformed blobs and misuse (double install, reads
//! before install, unknown names) are fatal: the blob comes from a trusted
//! build step and such failures are build or embedding bugs.
//!
//! Wire format, little-endian `i32` throughout:
//!
//! ```text
//! section := debuggerCount debuggerCount*pair libraryCount libraryCount*pair
//! pair    := nameLen nameBytes sourceLen sourceBytes
//! ```

pub mod catalog;
pub mod collection;
pub mod cursor;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod writer;

mod schema_loader;

pub use catalog::{
    CatalogSummary, EntrySummary, NativeCategory, NativesRegistry, ScriptCatalog, ScriptEntry,
    ScriptKind, natives,
};
pub use collection::{
    NativesCollection, builtins_count, debugger_count, index_of, raw_script_source,
    raw_scripts_size, script_name, scripts_source, set_raw_scripts_source,
};
pub use cursor::ByteCursor;
pub use error::NativesError;
pub use loader::{
    BLOB_SECTIONS, NativesBlob, install_blob, load_from_blob, try_install_blob,
};
pub use manifest::{NativesManifest, encode_sections, load_manifest, pack_manifest};
pub use writer::{BlobWriter, SectionSources};

//! Natives catalog wiring.
//!
//! `ScriptCatalog` is one decoded section of the natives blob; entries borrow
//! from the blob buffer. `NativesRegistry` holds at most one catalog per
//! `NativeCategory`, and `natives()` is the process-wide instance.

pub mod identity;
pub mod model;
pub mod repository;
pub mod summary;

pub use identity::{NativeCategory, ScriptKind};
pub use model::{ScriptCatalog, ScriptEntry};
pub use repository::{NativesRegistry, natives};
pub use summary::{CatalogSummary, EntrySummary};

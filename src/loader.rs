//! Installs a natives blob into a registry.
//!
//! A blob is exactly two sections back to back, Core then Experimental.
//! Both are decoded and the blob is checked for exact consumption before
//! either catalog is published, so a malformed blob never leaves a
//! half-filled registry behind.

use crate::catalog::{NativeCategory, NativesRegistry, ScriptCatalog, natives};
use crate::cursor::ByteCursor;
use crate::error::{NativesError, or_fatal};

/// Categories stored in a natives blob, in encoding order.
pub const BLOB_SECTIONS: [NativeCategory; 2] = [NativeCategory::Core, NativeCategory::Experimental];

#[derive(Clone, Copy, Debug)]
/// Embedder-supplied natives blob bytes.
pub struct NativesBlob<'a> {
    bytes: &'a [u8],
}

impl<'a> NativesBlob<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self, NativesError> {
        if bytes.is_empty() {
            return Err(NativesError::EmptyBlob);
        }
        Ok(Self { bytes })
    }

    /// Wrap a pointer/length pair handed over by an embedder.
    ///
    /// # Safety
    ///
    /// When `data` is non-null and `raw_size` is positive, `data` must point
    /// to `raw_size` initialized bytes that stay valid and unmodified for `'a`.
    pub unsafe fn from_raw_parts(data: *const u8, raw_size: i32) -> Result<Self, NativesError> {
        if data.is_null() {
            return Err(NativesError::NullBlob);
        }
        if raw_size <= 0 {
            return Err(NativesError::EmptyBlob);
        }
        let bytes = unsafe { std::slice::from_raw_parts(data, raw_size as usize) };
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Decode both sections without publishing them.
    pub fn decode(&self) -> Result<[ScriptCatalog<'a>; 2], NativesError> {
        let mut cursor = ByteCursor::new(self.bytes);
        let core = ScriptCatalog::decode(&mut cursor)?;
        let experimental = ScriptCatalog::decode(&mut cursor)?;
        if cursor.has_more() {
            return Err(NativesError::TrailingBytes {
                offset: cursor.position(),
                remaining: cursor.remaining(),
            });
        }
        Ok([core, experimental])
    }
}

pub fn try_install_blob<'a>(
    registry: &NativesRegistry<'a>,
    blob: &'a [u8],
) -> Result<(), NativesError> {
    let blob = NativesBlob::new(blob)?;
    let catalogs = blob.decode()?;
    for category in BLOB_SECTIONS {
        if registry.is_installed(category) {
            return Err(NativesError::AlreadyInstalled(category));
        }
    }
    for (category, catalog) in BLOB_SECTIONS.into_iter().zip(catalogs) {
        registry.try_set(category, catalog)?;
    }
    log::debug!("natives blob of {} bytes installed", blob.as_bytes().len());
    Ok(())
}

/// Install `blob` into `registry`; any malformed input or repeat install is fatal.
#[track_caller]
pub fn install_blob<'a>(registry: &NativesRegistry<'a>, blob: &'a [u8]) {
    or_fatal(try_install_blob(registry, blob))
}

/// Install `blob` into the process-wide registry.
///
/// Runs once during bootstrap, before other threads start reading natives.
/// Fails fatally on any malformed input or when called a second time.
#[track_caller]
pub fn load_from_blob(blob: &'static [u8]) {
    install_blob(natives(), blob)
}

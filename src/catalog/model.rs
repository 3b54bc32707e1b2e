//! Decoded representation of one natives section.
//!
//! A `ScriptCatalog` borrows every name and source from the blob it was
//! decoded from; the `'a` lifetime is that buffer's. The first
//! `debugger_entry_count()` entries are debugger-support scripts and the rest
//! are ordinary library scripts, in the order the blob lists them.

use crate::catalog::identity::ScriptKind;
use crate::cursor::ByteCursor;
use crate::error::{NativesError, or_fatal};
use std::str::Utf8Error;

// Smallest possible encoded pair: two empty length-prefixed strings.
const MIN_PAIR_SIZE: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// One (name, source) pair viewed in place inside the blob.
pub struct ScriptEntry<'a> {
    pub name: &'a [u8],
    pub source: &'a [u8],
}

impl<'a> ScriptEntry<'a> {
    pub fn name_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.name)
    }

    pub fn source_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.source)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScriptCatalog<'a> {
    entries: Vec<ScriptEntry<'a>>,
    debugger_count: usize,
}

impl<'a> ScriptCatalog<'a> {
    /// Decode one section: debugger pairs first, then library pairs.
    ///
    /// Any decode failure abandons the whole section; no partially built
    /// catalog is ever returned.
    pub fn decode(cursor: &mut ByteCursor<'a>) -> Result<Self, NativesError> {
        let start = cursor.position();
        let mut entries = Vec::new();

        let debugger_count = read_pairs(cursor, &mut entries)?;
        let library_count = read_pairs(cursor, &mut entries)?;

        log::debug!(
            "decoded natives section at bytes {}..{}: {} debugger, {} library",
            start,
            cursor.position(),
            debugger_count,
            library_count
        );

        Ok(Self {
            entries,
            debugger_count,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn debugger_entry_count(&self) -> usize {
        self.debugger_count
    }

    pub fn library_entry_count(&self) -> usize {
        self.entries.len() - self.debugger_count
    }

    pub fn entries(&self) -> &[ScriptEntry<'a>] {
        &self.entries
    }

    pub fn debugger_entries(&self) -> &[ScriptEntry<'a>] {
        &self.entries[..self.debugger_count]
    }

    pub fn library_entries(&self) -> &[ScriptEntry<'a>] {
        &self.entries[self.debugger_count..]
    }

    pub fn entry(&self, index: usize) -> Option<&ScriptEntry<'a>> {
        self.entries.get(index)
    }

    pub fn try_name(&self, index: usize) -> Result<&'a [u8], NativesError> {
        self.checked_entry(index).map(|entry| entry.name)
    }

    pub fn try_source(&self, index: usize) -> Result<&'a [u8], NativesError> {
        self.checked_entry(index).map(|entry| entry.source)
    }

    /// Name of the entry at `index`. An out-of-range index is fatal.
    #[track_caller]
    pub fn name(&self, index: usize) -> &'a [u8] {
        or_fatal(self.try_name(index))
    }

    /// Source of the entry at `index`. An out-of-range index is fatal.
    #[track_caller]
    pub fn source(&self, index: usize) -> &'a [u8] {
        or_fatal(self.try_source(index))
    }

    pub fn kind(&self, index: usize) -> Option<ScriptKind> {
        if index >= self.entries.len() {
            None
        } else if index < self.debugger_count {
            Some(ScriptKind::Debugger)
        } else {
            Some(ScriptKind::Library)
        }
    }

    /// Index of the first entry named exactly `name`, if any.
    pub fn position(&self, name: &[u8]) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    pub fn try_find_index(&self, name: &[u8]) -> Result<usize, NativesError> {
        self.position(name)
            .ok_or_else(|| NativesError::UnknownScript {
                name: String::from_utf8_lossy(name).into_owned(),
            })
    }

    /// Index of the first entry named exactly `name`.
    ///
    /// Catalog contents are fixed at build time, so a missing name is a
    /// programming error and fails fatally.
    #[track_caller]
    pub fn find_index(&self, name: &[u8]) -> usize {
        or_fatal(self.try_find_index(name))
    }

    fn checked_entry(&self, index: usize) -> Result<&ScriptEntry<'a>, NativesError> {
        self.entries.get(index).ok_or(NativesError::IndexOutOfRange {
            index,
            count: self.entries.len(),
        })
    }
}

/// Read one counted run of (name, source) pairs, returning how many were read.
fn read_pairs<'a>(
    cursor: &mut ByteCursor<'a>,
    entries: &mut Vec<ScriptEntry<'a>>,
) -> Result<usize, NativesError> {
    let offset = cursor.position();
    let count = cursor.read_i32()?;
    if count < 0 {
        return Err(NativesError::InvalidLength {
            offset,
            length: count,
        });
    }
    let count = count as usize;
    // The count comes from the blob; never reserve more than the remaining
    // bytes could hold.
    entries.reserve(count.min(cursor.remaining() / MIN_PAIR_SIZE));
    for _ in 0..count {
        let name = cursor.read_blob()?;
        let source = cursor.read_blob()?;
        entries.push(ScriptEntry { name, source });
    }
    Ok(count)
}

//! Sequential, bounds-checked reader over an immutable natives blob.
//!
//! All integers are little-endian `i32`; byte strings are an `i32` length
//! followed by that many raw bytes. Reads hand out views into the original
//! buffer, so nothing here allocates.

use crate::error::NativesError;
use byteorder::{ByteOrder, LittleEndian};

const INT_SIZE: usize = 4;

#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Byte offset of the next read.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// True until every byte of the buffer has been consumed.
    pub fn has_more(&self) -> bool {
        self.position < self.bytes.len()
    }

    pub fn read_i32(&mut self) -> Result<i32, NativesError> {
        let raw = self.take(INT_SIZE)?;
        Ok(LittleEndian::read_i32(raw))
    }

    /// Read a length-prefixed byte string.
    ///
    /// On failure the cursor stays where it was before the length prefix.
    pub fn read_blob(&mut self) -> Result<&'a [u8], NativesError> {
        let start = self.position;
        let length = self.read_i32()?;
        if length < 0 {
            self.position = start;
            return Err(NativesError::InvalidLength {
                offset: start,
                length,
            });
        }
        match self.take(length as usize) {
            Ok(view) => Ok(view),
            Err(err) => {
                self.position = start;
                Err(err)
            }
        }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], NativesError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(NativesError::TruncatedInput {
                offset: self.position,
                needed,
                remaining,
            });
        }
        let bytes = self.bytes;
        let view = &bytes[self.position..self.position + needed];
        self.position += needed;
        Ok(view)
    }
}

//! Encoder for the natives blob format.
//!
//! The build side of the loader: `natives-pack` and the tests assemble
//! sections with `SectionSources` and serialize them with `BlobWriter`. The
//! layout written here is exactly what `ScriptCatalog::decode` reads.

use crate::error::NativesError;
use byteorder::{LittleEndian, WriteBytesExt};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Owned (name, source) pairs for one section, debugger scripts first.
pub struct SectionSources {
    pub debugger: Vec<(Vec<u8>, Vec<u8>)>,
    pub library: Vec<(Vec<u8>, Vec<u8>)>,
}

impl SectionSources {
    pub fn push_debugger(&mut self, name: impl Into<Vec<u8>>, source: impl Into<Vec<u8>>) {
        self.debugger.push((name.into(), source.into()));
    }

    pub fn push_library(&mut self, name: impl Into<Vec<u8>>, source: impl Into<Vec<u8>>) {
        self.library.push((name.into(), source.into()));
    }

    pub fn len(&self) -> usize {
        self.debugger.len() + self.library.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct BlobWriter {
    buf: Vec<u8>,
}

impl BlobWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_i32(&mut self, value: i32) {
        // Writing into a Vec cannot fail.
        let _ = self.buf.write_i32::<LittleEndian>(value);
    }

    /// Length-prefixed byte string. Fails when `bytes` does not fit an `i32`.
    pub fn write_blob(&mut self, bytes: &[u8]) -> Result<(), NativesError> {
        let length = encoded_len(self.buf.len(), bytes.len())?;
        self.write_i32(length);
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn write_section(&mut self, section: &SectionSources) -> Result<(), NativesError> {
        self.write_pairs(&section.debugger)?;
        self.write_pairs(&section.library)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    fn write_pairs(&mut self, pairs: &[(Vec<u8>, Vec<u8>)]) -> Result<(), NativesError> {
        let count = encoded_len(self.buf.len(), pairs.len())?;
        self.write_i32(count);
        for (name, source) in pairs {
            self.write_blob(name)?;
            self.write_blob(source)?;
        }
        Ok(())
    }
}

fn encoded_len(offset: usize, len: usize) -> Result<i32, NativesError> {
    i32::try_from(len).map_err(|_| NativesError::InvalidLength {
        offset,
        length: i32::MAX,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_section_layout() {
        let mut section = SectionSources::default();
        section.push_debugger("d", "ab");
        let mut writer = BlobWriter::new();
        writer.write_section(&section).unwrap();
        let bytes = writer.finish();

        let mut expected = Vec::new();
        expected.extend_from_slice(&1i32.to_le_bytes());
        expected.extend_from_slice(&1i32.to_le_bytes());
        expected.push(b'd');
        expected.extend_from_slice(&2i32.to_le_bytes());
        expected.extend_from_slice(b"ab");
        expected.extend_from_slice(&0i32.to_le_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn section_counts_both_partitions() {
        let mut section = SectionSources::default();
        assert!(section.is_empty());
        section.push_debugger("d", "");
        section.push_library("l1", "");
        section.push_library("l2", "");
        assert_eq!(section.len(), 3);
    }

    #[test]
    fn length_overflow_is_rejected() {
        assert!(encoded_len(0, i32::MAX as usize).is_ok());
        assert!(matches!(
            encoded_len(12, i32::MAX as usize + 1),
            Err(NativesError::InvalidLength { offset: 12, .. })
        ));
    }
}

//! Failure taxonomy for blob decoding and catalog access.
//!
//! Two classes share one enum: malformed input (the blob does not match the
//! wire format) and misuse (double install, read before install, unknown
//! names, bad indices). Neither is recoverable for the runtime; the `try_*`
//! entry points hand the error back only so tooling and tests can inspect it.

use crate::catalog::NativeCategory;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NativesError {
    #[error("truncated natives blob: need {needed} bytes at offset {offset}, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid length {length} at offset {offset}")]
    InvalidLength { offset: usize, length: i32 },

    #[error("natives blob has {remaining} trailing bytes at offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("natives blob is empty")]
    EmptyBlob,

    #[error("natives blob pointer is null")]
    NullBlob,

    #[error("natives for category '{0}' are already installed")]
    AlreadyInstalled(NativeCategory),

    #[error("natives for category '{0}' were never installed")]
    NotInstalled(NativeCategory),

    #[error("no builtin script named '{name}'")]
    UnknownScript { name: String },

    #[error("script index {index} out of range (catalog holds {count} entries)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("{0} is not supported by the blob-backed natives store")]
    Unsupported(&'static str),
}

impl NativesError {
    /// True for errors caused by bytes that do not match the wire format.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            NativesError::TruncatedInput { .. }
                | NativesError::InvalidLength { .. }
                | NativesError::TrailingBytes { .. }
                | NativesError::EmptyBlob
                | NativesError::NullBlob
        )
    }
}

/// Abort the current operation with a diagnostic.
///
/// Every fatal path in the crate funnels through here so the error is logged
/// once before the panic unwinds.
#[track_caller]
pub(crate) fn fatal(err: NativesError) -> ! {
    log::error!("{err}");
    panic!("{err}");
}

/// Unwrap a result or fail fatally with its error.
#[track_caller]
pub(crate) fn or_fatal<T>(result: Result<T, NativesError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => fatal(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_malformed_input() {
        let truncated = NativesError::TruncatedInput {
            offset: 4,
            needed: 4,
            remaining: 1,
        };
        assert!(truncated.is_malformed_input());
        assert!(NativesError::EmptyBlob.is_malformed_input());
        assert!(!NativesError::NotInstalled(NativeCategory::Core).is_malformed_input());
        assert!(!NativesError::Unsupported("raw_scripts_size").is_malformed_input());
    }

    #[test]
    fn display_names_the_category() {
        let err = NativesError::AlreadyInstalled(NativeCategory::Experimental);
        assert_eq!(
            err.to_string(),
            "natives for category 'experimental' are already installed"
        );
    }

    #[test]
    #[should_panic(expected = "natives blob is empty")]
    fn fatal_panics_with_display_text() {
        fatal(NativesError::EmptyBlob);
    }
}

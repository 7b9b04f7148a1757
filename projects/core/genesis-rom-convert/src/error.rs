//! Error types for ROM conversion.

use crate::format::FormatTag;
use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur when converting a ROM between layouts.
///
/// Each condition is a distinct variant so that callers (e.g. a CLI) can report a specific
/// diagnostic. When one of these is returned, the source ROM has not been modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The ROM has an odd number of bytes, so it cannot be split into two halves.
    #[error("Malformed ROM: {len} bytes is not an even size")]
    MalformedInput {
        /// Length of the rejected ROM.
        len: usize,
    },

    /// One side of the conversion names the SMD layout, which is not supported.
    #[error("SMD is not supported (requested {from} -> {to})")]
    UnsupportedFormat {
        /// The requested source layout.
        from: FormatTag,
        /// The requested target layout.
        to: FormatTag,
    },

    /// No conversion exists between the requested layouts.
    #[error("Conversion from {from} to {to} is not possible")]
    UnsupportedConversion {
        /// The requested source layout.
        from: FormatTag,
        /// The requested target layout.
        to: FormatTag,
    },
}

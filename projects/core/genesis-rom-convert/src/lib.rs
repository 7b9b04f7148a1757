#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

/// Routing of conversion requests between ROM layouts
pub mod convert;
pub mod error;
pub mod format;
pub mod rom;

/// Byte permutations between the linear and interleaved layouts
pub mod transform;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub mod test_prelude;

// Re-export key types
pub use convert::{convert, route, Route};
pub use error::{ConvertError, ConvertResult};
pub use format::{FormatTag, ParseFormatError};
pub use rom::{RomImage, RomImageError};
pub use transform::{
    interleaved_to_linear, interleaved_to_linear_slice, linear_to_interleaved,
    linear_to_interleaved_slice, TransformValidationError,
};

#[cfg(feature = "std")]
pub use format::ensure_extension;

#[cfg(feature = "file-io")]
pub use file_io::{load_rom, save_rom, FileOperationError, FileOperationResult};

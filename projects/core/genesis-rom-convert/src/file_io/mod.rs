//! Loading and saving ROM images.
//!
//! Files are accessed through memory mappings using `lightweight-mmap`. A ROM is always read
//! into memory in full before it is converted, and written out in full afterwards.

mod error;
pub use error::*;

use crate::rom::{RomImage, RomImageError};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs::{self, OpenOptions};
use std::path::Path;

#[inline]
fn open_error(path: &Path, source: impl Into<FileIoError>) -> FileOperationError {
    FileOperationError::Open {
        path: path.to_path_buf(),
        source: source.into(),
    }
}

/// Reads the file at `path` into a new [`RomImage`].
///
/// # Errors
///
/// - [`FileOperationError::Open`] if the file does not exist or cannot be opened/mapped.
/// - [`FileOperationError::Rom`] if the file is larger than a ROM can be.
pub fn load_rom(path: &Path) -> FileOperationResult<RomImage> {
    let handle = ReadOnlyFileHandle::open(path).map_err(|e| open_error(path, e))?;
    let size = handle.size().map_err(|e| open_error(path, e))? as u64;

    if size > u32::MAX as u64 {
        return Err(RomImageError::TooLarge(size as usize).into());
    }

    // Empty files can't be mapped.
    if size == 0 {
        return Ok(RomImage::default());
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size as usize).map_err(|e| open_error(path, e))?;
    let rom = RomImage::from_slice(mapping.as_slice())?;

    log::debug!("Loaded {} bytes from {}", rom.len(), path.display());
    Ok(rom)
}

/// Writes `rom` to the file at `path`, replacing any existing file.
///
/// The parent directory must exist. After writing, the size of the file on disk is checked
/// against the size of the ROM.
///
/// # Errors
///
/// - [`FileOperationError::Open`] if the file cannot be created or mapped for writing.
/// - [`FileOperationError::SizeDiscrepancy`] if the written file does not match the ROM size.
/// - [`FileOperationError::Io`] if the written file cannot be inspected.
pub fn save_rom(path: &Path, rom: &RomImage) -> FileOperationResult<()> {
    let expected = rom.len() as u64;

    // Truncate first, so a longer existing file doesn't keep its tail.
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| open_error(path, e))?;

    if !rom.is_empty() {
        let handle = ReadWriteFileHandle::create_preallocated(path, rom.len() as i64)
            .map_err(|e| open_error(path, e))?;
        let mut mapping =
            ReadWriteMmap::new(&handle, 0, rom.len()).map_err(|e| open_error(path, e))?;

        let target = mapping.as_mut_slice();
        if target.len() != rom.len() {
            return Err(FileOperationError::SizeDiscrepancy {
                path: path.to_path_buf(),
                expected,
                actual: target.len() as u64,
            });
        }
        target.copy_from_slice(rom.data());
    }

    let actual = fs::metadata(path).map_err(FileIoError::from)?.len();
    if actual != expected {
        return Err(FileOperationError::SizeDiscrepancy {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    log::debug!("Wrote {} bytes to {}", expected, path.display());
    Ok(())
}

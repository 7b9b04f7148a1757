//! Error types for file I/O operations.

use crate::rom::RomImageError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for file operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Errors that can occur while loading or saving a ROM.
///
/// These are reported as is; no operation is retried.
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// The file could not be opened (or mapped) for reading or writing.
    #[error("Could not open \"{}\": {source}", .path.display())]
    Open {
        /// The file that was being opened.
        path: PathBuf,
        /// The underlying I/O error.
        source: FileIoError,
    },

    /// The file on disk does not have the size of the ROM that was written to it.
    #[error("Size discrepancy when writing \"{}\": expected {expected} bytes, found {actual}", .path.display())]
    SizeDiscrepancy {
        /// The file that was written.
        path: PathBuf,
        /// Size of the ROM.
        expected: u64,
        /// Size of the file after writing.
        actual: u64,
    },

    /// The file contents cannot be represented as a ROM.
    #[error("Invalid ROM: {0}")]
    Rom(#[from] RomImageError),

    /// Any other I/O operation failed
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),
}

/// Specific backend-related errors that can occur during file I/O operations.
#[derive(Debug, Error)]
pub enum LightweightMmapError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

/// File I/O errors that can occur with different backends
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error from lightweight-mmap backend
    #[error("lightweight-mmap error: {0}")]
    LightweightMmap(#[from] LightweightMmapError),

    /// Error from std I/O operations
    #[error("I/O error: {0}")]
    Std(#[from] std::io::Error),
}

impl From<lightweight_mmap::handles::HandleOpenError> for FileIoError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::LightweightMmap(LightweightMmapError::FileHandle(e))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for FileIoError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::LightweightMmap(LightweightMmapError::MemoryMapping(e))
    }
}

//! In-memory representation of a ROM image.

use alloc::vec::Vec;
use core::ops::Deref;
use thiserror::Error;

/// Errors raised when constructing a [`RomImage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RomImageError {
    /// The buffer is larger than a ROM size can express (`u32::MAX` bytes).
    #[error("ROM image too large: {0} bytes (maximum is 4294967295)")]
    TooLarge(usize),
}

/// A fully loaded ROM image.
///
/// The size is stored as a [`u32`], matching the address range of the cartridge formats
/// handled by this crate. The size always equals the length of the owned buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RomImage {
    size: u32,
    data: Vec<u8>,
}

impl RomImage {
    /// Creates a ROM image which takes ownership of `data`.
    ///
    /// # Errors
    ///
    /// - [`RomImageError::TooLarge`] if `data` holds more than `u32::MAX` bytes.
    pub fn new(data: Vec<u8>) -> Result<Self, RomImageError> {
        let size = u32::try_from(data.len()).map_err(|_| RomImageError::TooLarge(data.len()))?;
        Ok(Self { size, data })
    }

    /// Creates a ROM image by copying the bytes of `data`.
    ///
    /// # Errors
    ///
    /// - [`RomImageError::TooLarge`] if `data` holds more than `u32::MAX` bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self, RomImageError> {
        Self::new(data.to_vec())
    }

    /// Size of the ROM in bytes.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Size of the ROM in bytes, as a `usize`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the ROM holds no data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw ROM bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the ROM bytes. The length cannot be changed through this.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Wraps `data`, which must be exactly as long as this ROM, reusing its size.
    #[inline]
    pub(crate) fn with_same_size(&self, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), self.data.len());
        Self {
            size: self.size,
            data,
        }
    }

    /// Consumes the image, returning the owned buffer.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for RomImage {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for RomImage {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<Vec<u8>> for RomImage {
    type Error = RomImageError;

    fn try_from(data: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

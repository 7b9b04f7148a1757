//! ROM Layout Transforms
//!
//! This module provides the byte permutations between the linear (`.bin`) and interleaved
//! (`.md`) layouts of a Genesis / Mega Drive ROM.
//!
//! An interleaved ROM splits the linear ROM into two halves of `len / 2` bytes and alternates
//! their bytes: the second half occupies the even offsets, the first half the odd offsets.
//! Both directions are exact inverses of each other, so converting back and forth is lossless.
//!
//! Three layers are available:
//!
//! - [`interleaved_to_linear`] / [`linear_to_interleaved`] operate on a [`RomImage`] and
//!   return a freshly allocated [`RomImage`], leaving the source untouched.
//! - [`interleaved_to_linear_slice`] / [`linear_to_interleaved_slice`] operate on caller
//!   provided buffers, with validation.
//! - [`deinterleave::interleaved_to_linear_ptr`] / [`interleave::linear_to_interleaved_ptr`]
//!   are the raw, unchecked kernels.

pub mod deinterleave;
pub mod interleave;
pub mod safe;

pub use safe::{interleaved_to_linear_slice, linear_to_interleaved_slice, TransformValidationError};

use crate::error::{ConvertError, ConvertResult};
use crate::rom::RomImage;
use alloc::vec;
use likely_stable::unlikely;

/// Converts an interleaved (`.md`) ROM into a new linear (`.bin`) ROM.
///
/// # Errors
///
/// - [`ConvertError::MalformedInput`] if the ROM has an odd number of bytes.
///
/// # Examples
///
/// ```
/// use genesis_rom_convert::{transform::interleaved_to_linear, RomImage};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let md = RomImage::from_slice(&[0x11, 0x22, 0x33, 0x44])?;
/// let bin = interleaved_to_linear(&md)?;
/// assert_eq!(bin.data(), &[0x22, 0x44, 0x11, 0x33]);
/// # Ok(())
/// # }
/// ```
pub fn interleaved_to_linear(rom: &RomImage) -> ConvertResult<RomImage> {
    transform_rom(rom, deinterleave::interleaved_to_linear_ptr)
}

/// Converts a linear (`.bin`) ROM into a new interleaved (`.md`) ROM.
///
/// This is the exact inverse of [`interleaved_to_linear`].
///
/// # Errors
///
/// - [`ConvertError::MalformedInput`] if the ROM has an odd number of bytes.
pub fn linear_to_interleaved(rom: &RomImage) -> ConvertResult<RomImage> {
    transform_rom(rom, interleave::linear_to_interleaved_ptr)
}

#[inline]
fn transform_rom(
    rom: &RomImage,
    kernel: unsafe fn(*const u8, *mut u8, usize),
) -> ConvertResult<RomImage> {
    // Checked before allocating, so a rejected ROM costs nothing.
    if unlikely(!rom.len().is_multiple_of(2)) {
        return Err(ConvertError::MalformedInput { len: rom.len() });
    }

    let mut output = vec![0u8; rom.len()];
    // SAFETY: both buffers hold rom.len() bytes, which is even, and they don't overlap.
    unsafe { kernel(rom.data().as_ptr(), output.as_mut_ptr(), rom.len()) };

    Ok(rom.with_same_size(output))
}

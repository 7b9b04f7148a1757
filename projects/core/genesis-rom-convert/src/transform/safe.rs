//! Safe slice-based wrappers around the raw pointer transforms.
//!
//! These validate the input length and output buffer size before handing the buffers to the
//! raw kernels, so they can be used on caller-provided buffers (e.g. memory mapped files)
//! without allocating.

use super::{deinterleave::interleaved_to_linear_ptr, interleave::linear_to_interleaved_ptr};
use likely_stable::unlikely;
use thiserror::Error;

/// Validation errors for the slice-based transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformValidationError {
    /// Input length is odd, so the ROM cannot be split into two equal halves.
    #[error("Invalid input length: {0} (must be divisible by 2)")]
    InvalidLength(usize),

    /// Output buffer is too small to hold the transformed data.
    #[error("Output buffer too small: needed {needed}, got {actual}")]
    OutputBufferTooSmall {
        /// The required buffer size.
        needed: usize,
        /// The actual buffer size provided.
        actual: usize,
    },
}

#[inline]
fn validate(input: &[u8], output: &[u8]) -> Result<(), TransformValidationError> {
    if unlikely(!input.len().is_multiple_of(2)) {
        return Err(TransformValidationError::InvalidLength(input.len()));
    }

    if unlikely(output.len() < input.len()) {
        return Err(TransformValidationError::OutputBufferTooSmall {
            needed: input.len(),
            actual: output.len(),
        });
    }

    Ok(())
}

/// Converts interleaved (`.md`) ROM data to linear (`.bin`) ROM data.
///
/// Only the first `input.len()` bytes of `output` are written.
///
/// # Errors
///
/// - [`TransformValidationError::InvalidLength`] if input length is odd
/// - [`TransformValidationError::OutputBufferTooSmall`] if output buffer is smaller than input
///
/// # Examples
///
/// ```
/// use genesis_rom_convert::transform::interleaved_to_linear_slice;
/// # use genesis_rom_convert::transform::TransformValidationError;
///
/// # fn main() -> Result<(), TransformValidationError> {
/// let interleaved = [0x11, 0x22, 0x33, 0x44];
/// let mut linear = [0u8; 4];
///
/// interleaved_to_linear_slice(&interleaved, &mut linear)?;
/// assert_eq!(linear, [0x22, 0x44, 0x11, 0x33]);
/// # Ok(())
/// # }
/// ```
pub fn interleaved_to_linear_slice(
    input: &[u8],
    output: &mut [u8],
) -> Result<(), TransformValidationError> {
    validate(input, output)?;

    // Safety: We've validated the input length and output buffer size,
    // and the borrow checker guarantees the buffers don't overlap.
    unsafe {
        interleaved_to_linear_ptr(input.as_ptr(), output.as_mut_ptr(), input.len());
    }

    Ok(())
}

/// Converts linear (`.bin`) ROM data to interleaved (`.md`) ROM data.
///
/// This reverses [`interleaved_to_linear_slice`]. Only the first `input.len()` bytes of
/// `output` are written.
///
/// # Errors
///
/// - [`TransformValidationError::InvalidLength`] if input length is odd
/// - [`TransformValidationError::OutputBufferTooSmall`] if output buffer is smaller than input
///
/// # Examples
///
/// ```
/// use genesis_rom_convert::transform::{
///     interleaved_to_linear_slice, linear_to_interleaved_slice,
/// };
/// # use genesis_rom_convert::transform::TransformValidationError;
///
/// # fn main() -> Result<(), TransformValidationError> {
/// let original = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
/// let mut linear = [0u8; 6];
/// let mut restored = [0u8; 6];
///
/// interleaved_to_linear_slice(&original, &mut linear)?;
/// linear_to_interleaved_slice(&linear, &mut restored)?;
/// assert_eq!(original, restored);
/// # Ok(())
/// # }
/// ```
pub fn linear_to_interleaved_slice(
    input: &[u8],
    output: &mut [u8],
) -> Result<(), TransformValidationError> {
    validate(input, output)?;

    // Safety: We've validated the input length and output buffer size,
    // and the borrow checker guarantees the buffers don't overlap.
    unsafe {
        linear_to_interleaved_ptr(input.as_ptr(), output.as_mut_ptr(), input.len());
    }

    Ok(())
}

//! # Linear to Interleaved
//!
//! Produces the interleaved (`.md`) layout from a linear ROM. This is the exact inverse of
//! [`super::deinterleave`].
//!
//! - `output[2 * j + 1] = input[j]` for `j` in `[0, mid)`
//! - `output[2 * (j - mid)] = input[j]` for `j` in `[mid, len)`
//!
//! where `mid = len / 2`.

pub(crate) mod generic;
pub(crate) mod portable32;

/// Converts linear ROM data to interleaved ROM data using the best known implementation.
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of len bytes
/// - len must be divisible by 2
/// - input and output must not overlap
#[inline]
pub unsafe fn linear_to_interleaved_ptr(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
    debug_assert!(len.is_multiple_of(2));
    portable32::u32(input_ptr, output_ptr, len)
}

// Re-export functions for benchmarking when the 'bench' feature is enabled
#[cfg(feature = "bench")]
#[allow(clippy::missing_safety_doc)]
#[allow(missing_docs)]
pub mod bench {
    pub unsafe fn bytewise(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
        super::generic::bytewise(input_ptr, output_ptr, len)
    }

    pub unsafe fn u32(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
        super::portable32::u32(input_ptr, output_ptr, len)
    }
}

//! # Interleaved to Linear
//!
//! Restores the linear layout of an interleaved (`.md`) ROM.
//!
//! ## Input Format
//!
//! Byte pairs, where the even byte of each pair belongs to the second half of the ROM, and the
//! odd byte belongs to the first half:
//!
//! ```ignore
//! Offset | Contents
//! -------|------------------
//! 0      | linear[mid + 0]
//! 1      | linear[0]
//! 2      | linear[mid + 1]
//! 3      | linear[1]
//! ...    | ...
//! ```
//!
//! ## Output Format
//!
//! - `output[j] = input[2 * j + 1]` for `j` in `[0, mid)`
//! - `output[j] = input[2 * (j - mid)]` for `j` in `[mid, len)`
//!
//! where `mid = len / 2`.

pub(crate) mod generic;
pub(crate) mod portable32;

/// Converts interleaved ROM data to linear ROM data using the best known implementation.
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of len bytes
/// - len must be divisible by 2
/// - input and output must not overlap
#[inline]
pub unsafe fn interleaved_to_linear_ptr(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
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

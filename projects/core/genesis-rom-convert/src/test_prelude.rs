//! Common test imports and utilities for ROM conversion tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::{ConvertError, FormatTag, RomImage};

// Standard library imports commonly used in tests
pub use alloc::vec;
pub use alloc::vec::Vec;

/// Common type alias for the raw pointer kernels.
pub(crate) type KernelFn = unsafe fn(*const u8, *mut u8, usize);

/// A named kernel, used as an `rstest` case.
pub(crate) struct TestCase {
    pub name: &'static str,
    pub func: KernelFn,
}

/// Generates `len` bytes of test data where neighbouring bytes and the two halves differ.
///
/// Bytes in the first half count up from `0x00`, bytes in the second half count up from `0x80`,
/// so a byte landing in the wrong half or the wrong slot is easy to spot in an assert message.
pub(crate) fn generate_rom_test_data(len: usize) -> Vec<u8> {
    let half = len / 2;
    (0..len)
        .map(|x| {
            if x < half {
                x as u8
            } else {
                0x80_u8.wrapping_add((x - half) as u8)
            }
        })
        .collect()
}

/// Same as [`generate_rom_test_data`], wrapped in a [`RomImage`].
pub(crate) fn generate_rom(len: usize) -> RomImage {
    RomImage::new(generate_rom_test_data(len)).unwrap()
}

/// Runs `test_case` against the `reference` kernel for a buffer of `len` bytes and asserts
/// that both produce identical output.
pub(crate) fn run_kernel_against_reference(test_case: &TestCase, len: usize, reference: KernelFn) {
    let input = generate_rom_test_data(len);
    let mut output_expected = vec![0u8; len];
    let mut output_test = vec![0u8; len];

    unsafe {
        reference(input.as_ptr(), output_expected.as_mut_ptr(), len);
        (test_case.func)(input.as_ptr(), output_test.as_mut_ptr(), len);
    }

    assert_eq!(
        output_expected, output_test,
        "{} implementation produced different results than reference for {} bytes.",
        test_case.name, len
    );
}

/// Runs `test_case` on deliberately misaligned buffers, then undoes it with `inverse` and
/// checks that the original data comes back.
pub(crate) fn run_kernel_unaligned_roundtrip(test_case: &TestCase, len: usize, inverse: KernelFn) {
    let original = generate_rom_test_data(len);

    // Add 1 extra byte at the beginning to create misaligned buffers
    let mut original_unaligned = vec![0u8; len + 1];
    original_unaligned[1..].copy_from_slice(&original);
    let mut transformed = vec![0u8; len + 1];
    let mut reconstructed = vec![0u8; len + 1];

    unsafe {
        (test_case.func)(
            original_unaligned.as_ptr().add(1),
            transformed.as_mut_ptr().add(1),
            len,
        );
        inverse(
            transformed.as_ptr().add(1),
            reconstructed.as_mut_ptr().add(1),
            len,
        );
    }

    assert_eq!(
        original.as_slice(),
        &reconstructed[1..],
        "Mismatch {} roundtrip (unaligned) for {} bytes",
        test_case.name,
        len
    );
}

#[test]
fn validate_rom_test_data_generator() {
    assert_eq!(
        generate_rom_test_data(8),
        [0x00, 0x01, 0x02, 0x03, 0x80, 0x81, 0x82, 0x83]
    );
    assert!(generate_rom_test_data(0).is_empty());
}

/// Spreads the 4 bytes of `value` into bytes 0, 2, 4 and 6 of a `u64`.
#[inline(always)]
pub(crate) fn scatter_to_even_bytes(value: u32) -> u64 {
    let mut x = value as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x
}

/// Converts linear ROM data to interleaved ROM data, 8 output bytes at a time.
///
/// Each iteration reads a `u32` from each half of the input and merges them into 4 byte
/// pairs, written as a single `u64`. Remaining pairs are handled one at a time.
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of len bytes
/// - len must be divisible by 2
/// - input and output must not overlap
pub unsafe fn u32(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
    debug_assert!(len.is_multiple_of(2));

    let half = len / 2;
    let mut first_half_ptr = input_ptr;
    let mut second_half_ptr = input_ptr.add(half);
    let mut current_output_ptr = output_ptr;

    // 4 pairs per iteration
    let first_half_words_end = input_ptr.add(half - (half % 4));
    while first_half_ptr < first_half_words_end {
        let odd = u32::from_le((first_half_ptr as *const u32).read_unaligned());
        let even = u32::from_le((second_half_ptr as *const u32).read_unaligned());
        let pairs = scatter_to_even_bytes(even) | (scatter_to_even_bytes(odd) << 8);

        (current_output_ptr as *mut u64).write_unaligned(pairs.to_le());

        first_half_ptr = first_half_ptr.add(4);
        second_half_ptr = second_half_ptr.add(4);
        current_output_ptr = current_output_ptr.add(8);
    }

    // Handle remaining pairs
    let first_half_end = input_ptr.add(half);
    while first_half_ptr < first_half_end {
        current_output_ptr.write(second_half_ptr.read());
        current_output_ptr.add(1).write(first_half_ptr.read());

        first_half_ptr = first_half_ptr.add(1);
        second_half_ptr = second_half_ptr.add(1);
        current_output_ptr = current_output_ptr.add(2);
    }
}

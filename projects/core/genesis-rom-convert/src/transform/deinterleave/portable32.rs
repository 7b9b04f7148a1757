/// Selects bytes 0, 2, 4 and 6 of `value` and packs them into the low 32 bits.
#[inline(always)]
pub(crate) fn gather_even_bytes(value: u64) -> u32 {
    let mut x = value & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x >> 16)) & 0x0000_0000_FFFF_FFFF;
    x as u32
}

/// Converts interleaved ROM data to linear ROM data, 8 input bytes at a time.
///
/// Each iteration reads 4 byte pairs as a single `u64`, gathers the odd bytes into a `u32`
/// for the first half of the output, and the even bytes into a `u32` for the second half.
/// Remaining pairs are handled one at a time.
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
    let mut first_half_ptr = output_ptr;
    let mut second_half_ptr = output_ptr.add(half);
    let mut current_input_ptr = input_ptr;

    // 4 pairs per iteration
    let first_half_words_end = output_ptr.add(half - (half % 4));
    while first_half_ptr < first_half_words_end {
        let pairs = u64::from_le((current_input_ptr as *const u64).read_unaligned());
        let even = gather_even_bytes(pairs);
        let odd = gather_even_bytes(pairs >> 8);

        (first_half_ptr as *mut u32).write_unaligned(odd.to_le());
        (second_half_ptr as *mut u32).write_unaligned(even.to_le());

        first_half_ptr = first_half_ptr.add(4);
        second_half_ptr = second_half_ptr.add(4);
        current_input_ptr = current_input_ptr.add(8);
    }

    // Handle remaining pairs
    let first_half_end = output_ptr.add(half);
    while first_half_ptr < first_half_end {
        second_half_ptr.write(current_input_ptr.read());
        first_half_ptr.write(current_input_ptr.add(1).read());

        first_half_ptr = first_half_ptr.add(1);
        second_half_ptr = second_half_ptr.add(1);
        current_input_ptr = current_input_ptr.add(2);
    }
}

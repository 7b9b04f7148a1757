/// Converts interleaved ROM data to linear ROM data, one byte pair at a time.
///
/// This is the reference implementation the faster kernels are tested against.
///
/// # Safety
///
/// - input_ptr must be valid for reads of len bytes
/// - output_ptr must be valid for writes of len bytes
/// - len must be divisible by 2
/// - input and output must not overlap
#[cfg(any(test, feature = "bench"))]
pub unsafe fn bytewise(input_ptr: *const u8, output_ptr: *mut u8, len: usize) {
    debug_assert!(len.is_multiple_of(2));

    // Odd input bytes fill the first half, even input bytes the second half.
    let mut first_half_ptr = output_ptr;
    let mut second_half_ptr = output_ptr.add(len / 2);
    let mut current_input_ptr = input_ptr;
    let input_end_ptr = input_ptr.add(len);

    while current_input_ptr < input_end_ptr {
        second_half_ptr.write(current_input_ptr.read());
        first_half_ptr.write(current_input_ptr.add(1).read());

        first_half_ptr = first_half_ptr.add(1);
        second_half_ptr = second_half_ptr.add(1);
        current_input_ptr = current_input_ptr.add(2);
    }
}

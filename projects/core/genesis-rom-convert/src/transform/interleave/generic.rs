/// Converts linear ROM data to interleaved ROM data, one byte pair at a time.
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

    // First half goes to odd output positions, second half to even output positions.
    let mut first_half_ptr = input_ptr;
    let mut second_half_ptr = input_ptr.add(len / 2);
    let mut current_output_ptr = output_ptr;
    let output_end_ptr = output_ptr.add(len);

    while current_output_ptr < output_end_ptr {
        current_output_ptr.write(second_half_ptr.read());
        current_output_ptr.add(1).write(first_half_ptr.read());

        first_half_ptr = first_half_ptr.add(1);
        second_half_ptr = second_half_ptr.add(1);
        current_output_ptr = current_output_ptr.add(2);
    }
}

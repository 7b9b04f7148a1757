#![no_main]

// Compares the optimized transforms against the bytewise reference implementations.

use genesis_rom_convert::transform::{deinterleave, interleave};
use libfuzzer_sys::fuzz_target;

type KernelFn = unsafe fn(*const u8, *mut u8, usize);

fn run(kernel: KernelFn, input: &[u8]) -> Vec<u8> {
    let mut output = vec![0u8; input.len()];
    unsafe { kernel(input.as_ptr(), output.as_mut_ptr(), input.len()) };
    output
}

fuzz_target!(|data: &[u8]| {
    // The kernels only accept whole byte pairs.
    let input = &data[..data.len() & !1];

    assert_eq!(
        run(deinterleave::bench::u32, input),
        run(deinterleave::bench::bytewise, input),
        "Deinterleave kernels don't match"
    );
    assert_eq!(
        run(interleave::bench::u32, input),
        run(interleave::bench::bytewise, input),
        "Interleave kernels don't match"
    );
});

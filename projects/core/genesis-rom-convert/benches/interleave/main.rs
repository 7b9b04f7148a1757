use core::{alloc::Layout, hint::black_box, time::Duration};
use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion};
use genesis_rom_convert::transform::{deinterleave, interleave};
use safe_allocator_api::RawAlloc;

type KernelFn = unsafe fn(*const u8, *mut u8, usize);

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn bench_kernel(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    name: &str,
    kernel: KernelFn,
    input: &RawAlloc,
    output: &mut RawAlloc,
    size: usize,
) {
    group.bench_function(name, |b| {
        b.iter(|| unsafe {
            kernel(
                black_box(input.as_ptr()),
                black_box(output.as_mut_ptr()),
                black_box(size),
            )
        })
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    // 4MiB, the size of the largest common cartridges.
    let size = 4 * 1024 * 1024;
    let mut input = allocate_align_64(size);
    let mut output = allocate_align_64(size);
    for (x, byte) in input.as_mut_slice().iter_mut().enumerate() {
        *byte = x as u8;
    }

    let mut group = c.benchmark_group("Interleaved to Linear");
    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));
    bench_kernel(&mut group, "bytewise", deinterleave::bench::bytewise, &input, &mut output, size);
    bench_kernel(&mut group, "u32", deinterleave::bench::u32, &input, &mut output, size);
    group.finish();

    let mut group = c.benchmark_group("Linear to Interleaved");
    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.warm_up_time(Duration::from_secs(3));
    group.measurement_time(Duration::from_secs(10));
    bench_kernel(&mut group, "bytewise", interleave::bench::bytewise, &input, &mut output, size);
    bench_kernel(&mut group, "u32", interleave::bench::u32, &input, &mut output, size);
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);

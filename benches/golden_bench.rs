//! Benchmarks for the golden-reference kernels
//!
//! Run with: cargo bench --bench golden_bench

use bfp_golden::compare;
use bfp_golden::convert;
use bfp_golden::fft::{bit_reverse, forward_fft, SineTable};
use bfp_golden::frame_power::{fd_frame_power, MantissaWidth};
use bfp_golden::random::TestRng;
use bfp_golden::types::{Complex, ComplexI32};
use bfp_golden::vector::{complex_vector, int32_vector, VectorSpec};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_forward_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_fft");

    for &n in &[256usize, 1024, 4096] {
        let table = SineTable::new(n);
        let spec = VectorSpec { length: n, exponent: -31, seed: 1 };
        let buf: Vec<Complex> = complex_vector(&spec).unwrap().golden;

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut work = buf.clone();
                bit_reverse(&mut work);
                forward_fft(&mut work, &table);
                black_box(work)
            })
        });
    }

    group.finish();
}

fn bench_comparator(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparator");

    let n = 4096;
    let stimulus = int32_vector(&VectorSpec { length: n, exponent: -31, seed: 2 }).unwrap();

    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("bfp_vector_i32", |b| {
        b.iter(|| {
            compare::bfp_vector_i32(
                black_box(&stimulus.raw),
                stimulus.exponent,
                black_box(&stimulus.golden),
                0,
                n,
            )
        })
    });

    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    let n = 4096;
    let stimulus = int32_vector(&VectorSpec { length: n, exponent: -31, seed: 3 }).unwrap();

    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("narrow_i32", |b| {
        b.iter(|| {
            stimulus
                .golden
                .iter()
                .map(|&v| convert::f64_to_i32(v, -31))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_frame_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_power");

    let n = 4096;
    let bins: Vec<ComplexI32> = complex_vector(&VectorSpec { length: n, exponent: -31, seed: 4 })
        .unwrap()
        .raw;

    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("fd_frame_power", |b| {
        b.iter(|| fd_frame_power(black_box(&bins), -31, MantissaWidth::W32))
    });

    group.finish();
}

fn bench_rng(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng");

    let n = 1024u64;
    group.throughput(Throughput::Elements(n));
    group.bench_function("next_u32", |b| {
        b.iter(|| {
            let mut rng = TestRng::new(black_box(1));
            let mut acc = 0u32;
            for _ in 0..n {
                acc ^= rng.next_u32();
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_forward_fft,
    bench_comparator,
    bench_conversion,
    bench_frame_power,
    bench_rng
);
criterion_main!(benches);

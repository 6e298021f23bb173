//! Padded convolution benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability per rank (1D signals, 2D images, 3D volumes)
//! - Kernel footprint (3 to 15 taps per axis)
//! - Missing data (NaN-aware renormalization at increasing NaN density)
//! - Thread scaling against the single-threaded `padconv` pass
//!
//! For serial execution, use `FASTPADCONV_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTPADCONV_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastPadconv::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTPADCONV_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

fn padded_dims(dims: &[usize], kernel_dims: &[usize]) -> Vec<usize> {
    dims.iter()
        .zip(kernel_dims)
        .map(|(&n, &k)| n + 2 * (k / 2))
        .collect()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a padded input with Gaussian noise and a zero border.
fn generate_padded(dims: &[usize], kernel_dims: &[usize], seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 1.0).unwrap();

    let n: usize = padded_dims(dims, kernel_dims).iter().product();
    (0..n).map(|_| noise_dist.sample(&mut rng)).collect()
}

/// Replace a fraction of the samples with NaN.
fn punch_holes(data: &mut [f64], fraction: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let hole_dist = Uniform::new(0.0, 1.0).unwrap();

    for v in data.iter_mut() {
        if hole_dist.sample(&mut rng) < fraction {
            *v = f64::NAN;
        }
    }
}

/// Generate a normalized Gaussian kernel.
fn generate_kernel(kernel_dims: &[usize]) -> Vec<f64> {
    let n: usize = kernel_dims.iter().product();
    let mut kernel = Vec::with_capacity(n);

    for idx in 0..n {
        let mut rem = idx;
        let mut r2 = 0.0;
        for &k in kernel_dims.iter().rev() {
            let offset = (rem % k) as f64 - (k / 2) as f64;
            r2 += offset * offset;
            rem /= k;
        }
        kernel.push((-r2 / 8.0).exp());
    }

    let total: f64 = kernel.iter().sum();
    kernel.iter().map(|w| w / total).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(20);

    let cases: [(&str, Vec<usize>, Vec<usize>); 6] = [
        ("1d", vec![100_000], vec![9]),
        ("1d", vec![1_000_000], vec![9]),
        ("2d", vec![256, 256], vec![5, 5]),
        ("2d", vec![1024, 1024], vec![5, 5]),
        ("3d", vec![32, 32, 32], vec![3, 3, 3]),
        ("3d", vec![96, 96, 96], vec![3, 3, 3]),
    ];

    for (rank, dims, kernel_dims) in cases {
        let size: usize = dims.iter().product();
        group.throughput(Throughput::Elements(size as u64));

        let padded = generate_padded(&dims, &kernel_dims, 42);
        let kernel = generate_kernel(&kernel_dims);
        let conv = Convolution::new().parallel(use_parallel).build().unwrap();
        let mut result = vec![0.0; size];

        group.bench_with_input(BenchmarkId::new(rank, size), &size, |b, _| {
            b.iter(|| {
                conv.convolve(
                    &mut result,
                    black_box(&padded),
                    black_box(&kernel),
                    &dims,
                    &kernel_dims,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_kernel_size(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("kernel_size_{}", mode_name));
    group.sample_size(20);

    let dims = [512, 512];
    for k in [3, 7, 11, 15] {
        let kernel_dims = [k, k];
        let padded = generate_padded(&dims, &kernel_dims, 42);
        let kernel = generate_kernel(&kernel_dims);
        let conv = Convolution::new().parallel(use_parallel).build().unwrap();
        let mut result = vec![0.0; dims[0] * dims[1]];

        group.bench_with_input(BenchmarkId::new("2d_512", k), &k, |b, _| {
            b.iter(|| {
                conv.convolve(
                    &mut result,
                    black_box(&padded),
                    black_box(&kernel),
                    &dims,
                    &kernel_dims,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_missing_data(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("missing_data_{}", mode_name));
    group.sample_size(20);

    let dims = [512, 512];
    let kernel_dims = [7, 7];
    let kernel = generate_kernel(&kernel_dims);

    for (label, nan_interpolate) in [("plain", false), ("nan_interpolate", true)] {
        for percent in [0u32, 10, 50] {
            let mut padded = generate_padded(&dims, &kernel_dims, 42);
            punch_holes(&mut padded, percent as f64 / 100.0, 7);

            let conv = Convolution::new()
                .nan_interpolate(nan_interpolate)
                .parallel(use_parallel)
                .build()
                .unwrap();
            let mut result = vec![0.0; dims[0] * dims[1]];

            group.bench_with_input(BenchmarkId::new(label, percent), &percent, |b, _| {
                b.iter(|| {
                    conv.convolve(
                        &mut result,
                        black_box(&padded),
                        black_box(&kernel),
                        &dims,
                        &kernel_dims,
                    )
                    .unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("threads");
    group.sample_size(20);

    let dims = [64, 128, 128];
    let kernel_dims = [5, 5, 5];
    let padded = generate_padded(&dims, &kernel_dims, 42);
    let kernel = generate_kernel(&kernel_dims);
    let size: usize = dims.iter().product();
    let mut result = vec![0.0; size];

    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("padconv_sequential", |b| {
        b.iter(|| {
            padconv::prelude::convolve_boundary_padded(
                &mut result,
                black_box(&padded),
                black_box(&kernel),
                &dims,
                &kernel_dims,
                true,
            )
            .unwrap()
        })
    });

    for threads in [1, 2, 4, 8] {
        let conv = Convolution::new()
            .nan_interpolate(true)
            .threads(threads)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("fastPadconv", threads), &threads, |b, _| {
            b.iter(|| {
                conv.convolve(
                    &mut result,
                    black_box(&padded),
                    black_box(&kernel),
                    &dims,
                    &kernel_dims,
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_kernel_size,
    bench_missing_data,
    bench_threads,
);

criterion_main!(benches);

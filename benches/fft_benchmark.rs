use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use num_complex::Complex64;
use std::hint::black_box;

use lithosim::fourier::{Direction, Fft1d, Fft2d};

/// Benchmark the transform kernels over the length classes the imaging
/// pipeline actually produces: powers of two, hard-coded radices, primes
/// handled by Rader's algorithm and mixed composite lengths.
fn bench_fft_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_1d");

    for n in [64usize, 256, 1024, 47, 94, 360, 101, 1000] {
        let signal: Vec<Complex64> = (0..n)
            .map(|k| Complex64::new((k as f64 * 0.37).sin(), (k as f64 * 0.11).cos()))
            .collect();

        group.bench_function(format!("forward_{}", n), |b| {
            let mut plan = Fft1d::new(n, Direction::Forward).unwrap();
            let mut data = signal.clone();
            b.iter(|| {
                plan.execute(black_box(&mut data)).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_fft_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_2d");

    for (rows, cols) in [(64usize, 64usize), (160, 160), (1, 1024)] {
        let data = Array2::from_shape_fn((rows, cols), |(r, c)| {
            Complex64::new((r as f64 * 0.7).sin(), (c as f64 * 0.3).cos())
        });

        group.bench_function(format!("backward_{}x{}", rows, cols), |b| {
            let mut plan = Fft2d::new(rows, cols, Direction::Backward).unwrap();
            let mut buffer = data.clone();
            b.iter(|| {
                plan.execute(black_box(&mut buffer)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fft_1d, bench_fft_2d);
criterion_main!(benches);

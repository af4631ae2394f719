//! Benchmarks for stationary iterative solvers.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nalgebra::{DMatrix, DVector};
use rayleigh_solver::{StationaryConfig, solve_gauss_seidel, solve_jacobi};

fn dominant_system(size: usize) -> (DMatrix<f64>, DVector<f64>) {
    // Diagonally dominant matrix (both methods guaranteed to converge)
    let a = DMatrix::from_fn(size, size, |i, j| {
        if i == j {
            (size as f64) + 1.0
        } else {
            1.0 / ((i as f64 - j as f64).abs() + 1.0)
        }
    });
    let b = DVector::from_fn(size, |i, _| (i + 1) as f64);
    (a, b)
}

fn bench_jacobi(c: &mut Criterion) {
    let mut group = c.benchmark_group("jacobi");

    for size in [10, 50, 100, 500] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &size,
            |bencher, &size| {
                let (a, b) = dominant_system(size);
                let config = StationaryConfig {
                    max_iter: 100,
                    tol: 1e-10,
                };

                bencher.iter(|| solve_jacobi(black_box(&a), black_box(&b), &config).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_gauss_seidel(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_seidel");

    for size in [10, 50, 100, 500] {
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &size,
            |bencher, &size| {
                let (a, b) = dominant_system(size);
                let config = StationaryConfig {
                    max_iter: 100,
                    tol: 1e-10,
                };

                bencher.iter(|| solve_gauss_seidel(black_box(&a), black_box(&b), &config).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_jacobi, bench_gauss_seidel);
criterion_main!(benches);

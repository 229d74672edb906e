use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use linfield_algebra::Rational;
use linfield_lup::{lup_decomposition, lup_decomposition_recursive, permutation};
use linfield_matrix::Matrix;
use rand::Rng;

fn random_matrix<T>(n: usize, f: impl Fn(i64) -> T) -> Matrix<T> {
    let mut rng = rand::rng();
    Matrix::from_shape_fn([n, n], |_| f(rng.random_range(-100..=100))).unwrap()
}

fn bench_lup_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("lup_f64");

    for n in [4, 16, 64] {
        let a = random_matrix(n, |x| x as f64);

        group.bench_with_input(BenchmarkId::new("iterative", n), &a, |b, a| {
            b.iter(|| black_box(lup_decomposition(a).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("recursive", n), &a, |b, a| {
            b.iter(|| black_box(lup_decomposition_recursive(a).unwrap()))
        });
    }

    group.finish();
}

fn bench_lup_rational(c: &mut Criterion) {
    let mut group = c.benchmark_group("lup_rational");

    for n in [4, 6] {
        let a = random_matrix(n, Rational::from);

        group.bench_with_input(BenchmarkId::new("iterative", n), &a, |b, a| {
            b.iter(|| black_box(lup_decomposition(a).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("recursive", n), &a, |b, a| {
            b.iter(|| black_box(lup_decomposition_recursive(a).unwrap()))
        });
    }

    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for n in [3, 5, 7] {
        let a = random_matrix(n, |x| x as f64);

        group.bench_with_input(BenchmarkId::new("lup", n), &a, |b, a| {
            b.iter(|| black_box(linfield_lup::calc_determinant(a).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("permutation", n), &a, |b, a| {
            b.iter(|| black_box(permutation::calc_determinant(a).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lup_f64, bench_lup_rational, bench_determinant);
criterion_main!(benches);

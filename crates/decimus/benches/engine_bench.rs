//! Benchmarks for the polynomial and solver hot paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use decimus_calculus::nth_derivative;
use decimus_decimal::{Decimal, NumericContext};
use decimus_poly::Polynomial;
use decimus_solve::{solve_polynomial, SolveOptions};

/// Generates a polynomial with small integer coefficients.
fn sample_poly(ctx: &NumericContext, degree: usize) -> Polynomial {
    let coeffs = (0..=degree)
        .map(|i| ctx.from_i64((i as i64 % 100) - 50))
        .collect();
    Polynomial::new(coeffs)
}

fn bench_poly_mul(c: &mut Criterion) {
    let ctx = NumericContext::new();
    let mut group = c.benchmark_group("poly_mul");

    for size in [4, 16, 64] {
        let p = sample_poly(&ctx, size);
        let q = sample_poly(&ctx, size);

        group.bench_with_input(BenchmarkId::new("schoolbook", size), &size, |b, _| {
            b.iter(|| black_box(p.mul(&q)));
        });
    }

    group.finish();
}

fn bench_poly_eval(c: &mut Criterion) {
    let ctx = NumericContext::new();
    let x = ctx.from_i64(3);
    let mut group = c.benchmark_group("poly_eval");

    for size in [4, 16, 64] {
        let p = sample_poly(&ctx, size);

        group.bench_with_input(BenchmarkId::new("horner", size), &size, |b, _| {
            b.iter(|| black_box(p.eval(&x)));
        });
    }

    group.finish();
}

fn bench_nth_derivative(c: &mut Criterion) {
    let ctx = NumericContext::new();
    let cube = |x: &Decimal| x.powi(3);
    let at = ctx.from_i64(2);
    let mut group = c.benchmark_group("nth_derivative");

    for order in [1usize, 3, 6] {
        group.bench_with_input(BenchmarkId::new("forward", order), &order, |b, _| {
            b.iter(|| black_box(nth_derivative(&ctx, &cube, order, &at)));
        });
    }

    group.finish();
}

fn bench_solve_polynomial(c: &mut Criterion) {
    let ctx = NumericContext::new();
    let p = Polynomial::new(vec![ctx.from_i64(-4), ctx.zero(), ctx.one()]);
    let options = SolveOptions::new().with_starting_point(ctx.from_i64(1));

    c.bench_function("solve_polynomial/x2_minus_4", |b| {
        b.iter(|| black_box(solve_polynomial(&ctx, &p, &options)));
    });
}

criterion_group!(
    benches,
    bench_poly_mul,
    bench_poly_eval,
    bench_nth_derivative,
    bench_solve_polynomial
);
criterion_main!(benches);

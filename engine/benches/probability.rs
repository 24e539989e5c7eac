//! Benchmark harness for the exact probability core
//!
//! Measures binomial construction and per-outcome hypergeometric
//! probabilities on the classic 80/20 draw.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keno_engine::combinatorics::binomial;
use keno_engine::{GameConstants, HitDistribution, Hypergeometric};

fn benchmark_binomial(c: &mut Criterion) {
    c.bench_function("binomial_80_choose_10", |b| {
        b.iter(|| binomial(black_box(80), black_box(10)))
    });

    c.bench_function("binomial_80_choose_40", |b| {
        b.iter(|| binomial(black_box(80), black_box(40)))
    });
}

fn benchmark_outcome_grid(c: &mut Criterion) {
    let hg = Hypergeometric::new(GameConstants::classic());

    c.bench_function("hypergeometric_full_grid", |b| {
        b.iter(|| {
            let mut sum = 0.0_f64;
            for picks in 1..=10u32 {
                for hits in 0..=picks {
                    sum += hg.probability(black_box(picks), black_box(hits)).unwrap_or(0.0);
                }
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, benchmark_binomial, benchmark_outcome_grid);
criterion_main!(benches);

//! # Continued-Fraction Benchmarks
//!
//! Measures the classical convergent search used to recover periods
//! from measured frequencies.
//!
//! Run: `cargo bench --bench fraction_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shor_factor::find_period_candidate;

fn bench_convergents(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergents");

    group.bench_function("shor_typical", |b| {
        b.iter(|| black_box(find_period_candidate(black_box(191), 256, 15)))
    });

    group.bench_function("worst_case_fibonacci", |b| {
        // Quocientes todos 1: máximo de passos euclidianos
        b.iter(|| {
            black_box(find_period_candidate(
                black_box(7_540_113_804_746_346_429),
                12_200_160_415_121_876_738,
                u64::MAX,
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_convergents);
criterion_main!(benches);

//! # Gate Engine Benchmarks
//!
//! Measures single-gate application cost as the register grows, and the
//! cost of a full modular multiplication circuit.
//!
//! Run: `cargo bench --bench engine_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shor_arith::modular_mul_const;
use shor_core::AmplitudeStore;

/// Benchmark Hadamard application across register sizes
fn bench_single_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_gate");

    for n in [8usize, 12, 16, 20] {
        group.bench_with_input(BenchmarkId::new("hadamard", n), &n, |b, &n| {
            let mut store = AmplitudeStore::default();
            let reg = store.allocate(n).unwrap();
            b.iter(|| {
                store.h(black_box(reg.qubit(0))).unwrap();
            })
        });
    }

    group.finish();
}

/// Benchmark controlled gates (the submask walk shrinks with each control)
fn bench_controlled_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled_gate");

    let mut store = AmplitudeStore::default();
    let reg = store.allocate(16).unwrap();

    group.bench_function("cnot", |b| {
        b.iter(|| store.cnot(black_box(reg.qubit(0)), reg.qubit(1)).unwrap())
    });

    group.bench_function("toffoli", |b| {
        b.iter(|| {
            store
                .ccnot(black_box(reg.qubit(0)), reg.qubit(1), reg.qubit(2))
                .unwrap()
        })
    });

    group.finish();
}

/// Benchmark a full modular multiplication (the mod-exp workhorse)
fn bench_modular_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("modular_multiply");
    group.sample_size(10);

    group.bench_function("mul_7_mod_15", |b| {
        b.iter(|| {
            let mut store = AmplitudeStore::default();
            let reg = store.allocate(4).unwrap();
            store.x(reg.qubit(0)).unwrap();
            modular_mul_const(&mut store, 15, 7, &reg).unwrap();
            black_box(store.num_qubits())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_gate,
    bench_controlled_gate,
    bench_modular_multiply
);
criterion_main!(benches);

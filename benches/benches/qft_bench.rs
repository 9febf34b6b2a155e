//! # QFT Benchmarks
//!
//! Measures the O(n²)-gate quantum Fourier transform across register
//! sizes.
//!
//! Run: `cargo bench --bench qft_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shor_core::AmplitudeStore;
use shor_fourier::{inverse_qft, qft};

fn bench_qft(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft");
    group.sample_size(20);

    for n in [6usize, 10, 14] {
        group.bench_with_input(BenchmarkId::new("forward", n), &n, |b, &n| {
            let mut store = AmplitudeStore::default();
            let reg = store.allocate(n).unwrap();
            b.iter(|| qft(&mut store, black_box(&reg)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("roundtrip", n), &n, |b, &n| {
            let mut store = AmplitudeStore::default();
            let reg = store.allocate(n).unwrap();
            b.iter(|| {
                qft(&mut store, black_box(&reg)).unwrap();
                inverse_qft(&mut store, &reg).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_qft);
criterion_main!(benches);

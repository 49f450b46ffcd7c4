//! Benchmarks for ensemble construction and row scoring on synthetic data.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inne::dataset::Dataset;
use inne::ensemble::Ensemble;
use inne::scorer::score_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform synthetic table with a handful of planted outliers.
fn synthetic_dataset(rows: usize, features: usize) -> Dataset {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    let mut data = Vec::with_capacity(rows);
    for i in 0..rows {
        let scale = if i % 97 == 0 { 100.0 } else { 1.0 };
        data.push((0..features).map(|_| rng.gen_range(-1.0..1.0) * scale).collect());
    }
    Dataset::new(data, None).unwrap()
}

fn bench_build_ensemble(c: &mut Criterion) {
    let dataset = synthetic_dataset(2000, 8);

    c.bench_function("build_ensemble_t100_psi8", |b| {
        b.iter(|| {
            Ensemble::build(
                black_box(&dataset),
                8,
                100,
                StdRng::seed_from_u64(42),
            )
            .unwrap()
        })
    });
}

fn bench_score_all(c: &mut Criterion) {
    let dataset = synthetic_dataset(2000, 8);
    let ensemble = Ensemble::build(&dataset, 8, 100, StdRng::seed_from_u64(42)).unwrap();

    c.bench_function("score_all_n2000_t100", |b| {
        b.iter(|| score_all(black_box(&dataset), black_box(&ensemble)))
    });
}

criterion_group!(benches, bench_build_ensemble, bench_score_all);
criterion_main!(benches);

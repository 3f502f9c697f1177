//! Criterion benchmarks for the flood engine on its own.
//!
//! Extrusion happens outside the timed loop: each iteration clones a
//! pre-extruded space and floods the clone.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use tarn_bench::{basin_profile, reference_profile, stress_profile, terraced_profile};
use tarn_engine::FloodEngine;
use tarn_space::CubeSpace;

fn bench_flood(c: &mut Criterion, name: &str, space: CubeSpace) {
    let mut engine = FloodEngine::new().with_level_metrics(false);
    c.bench_function(name, |b| {
        b.iter_batched_ref(
            || space.clone(),
            |s| black_box(engine.flood(s)),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: flood 100x100 random terrain.
fn bench_flood_reference(c: &mut Criterion) {
    bench_flood(c, "flood_reference_10k", CubeSpace::extrude(&reference_profile(42)));
}

/// Benchmark: flood 316x316 random terrain.
fn bench_flood_stress(c: &mut Criterion) {
    bench_flood(c, "flood_stress_100k", CubeSpace::extrude(&stress_profile(42)));
}

/// Benchmark: flood a 100x100 bowl 20 levels deep; nothing drains.
fn bench_flood_basin(c: &mut Criterion) {
    bench_flood(c, "flood_basin_100x100x20", CubeSpace::extrude(&basin_profile(100, 20)));
}

/// Benchmark: flood 101x101 concentric terraces.
fn bench_flood_terraced(c: &mut Criterion) {
    bench_flood(c, "flood_terraced_101", CubeSpace::extrude(&terraced_profile(101)));
}

/// Benchmark: re-flood an already resolved space in place.
fn bench_reflood(c: &mut Criterion) {
    let mut space = CubeSpace::extrude(&reference_profile(42));
    let mut engine = FloodEngine::new();
    engine.flood(&mut space);

    c.bench_function("reflood_reference_10k", |b| {
        b.iter(|| black_box(engine.flood(&mut space)));
    });
}

criterion_group!(
    benches,
    bench_flood_reference,
    bench_flood_stress,
    bench_flood_basin,
    bench_flood_terraced,
    bench_reflood
);
criterion_main!(benches);

//! Criterion micro-benchmarks for index/node mapping.

use criterion::{criterion_group, criterion_main, Criterion};
use spindex_bench::probe_points;
use spindex_core::{Extent2, Extent3, Variant};
use spindex_space::{NodeIndex, PlanarIndex, SphericalIndex, VolumeIndex};
use std::hint::black_box;

/// Benchmark: to_node() then to_index() on all 10K nodes of a 100x100 centre grid.
fn bench_round_trip_planar_10k(c: &mut Criterion) {
    let grid = PlanarIndex::new(Extent2::new(100, 100), Variant::Center).unwrap();

    c.bench_function("round_trip_planar_10k", |b| {
        b.iter(|| {
            for i in 0..grid.total() {
                let node = grid.to_node(i).unwrap();
                black_box(grid.to_index(&node).unwrap());
            }
        });
    });
}

/// Benchmark: to_node() then to_index() on all 9261 nodes of a 20^3 corner lattice.
fn bench_round_trip_volume_corner(c: &mut Criterion) {
    let lattice = VolumeIndex::new(Extent3::cube(20), Variant::Corner).unwrap();

    c.bench_function("round_trip_volume_corner", |b| {
        b.iter(|| {
            for i in 0..lattice.total() {
                let node = lattice.to_node(i).unwrap();
                black_box(lattice.to_index(&node).unwrap());
            }
        });
    });
}

/// Benchmark: to_node() on every node of a 15-layer sphere.
///
/// Ring lookup is a linear walk, so this tracks its cost per index.
fn bench_to_node_sphere_15(c: &mut Criterion) {
    let sphere = SphericalIndex::new(15).unwrap();

    c.bench_function("to_node_sphere_15", |b| {
        b.iter(|| {
            for i in 0..sphere.total() {
                black_box(sphere.to_node(i).unwrap());
            }
        });
    });
}

/// Benchmark: to_index() for 1000 deterministic directions on a 180-layer sphere.
fn bench_to_index_sphere_180(c: &mut Criterion) {
    let sphere = SphericalIndex::new(180).unwrap();
    let probes: Vec<_> = probe_points(1000, 1.0)
        .into_iter()
        .filter(|p| p.iter().any(|c| *c != 0.0))
        .collect();

    c.bench_function("to_index_sphere_180", |b| {
        b.iter(|| {
            for p in &probes {
                black_box(sphere.to_index(p).unwrap());
            }
        });
    });
}

/// Benchmark: nearest_index() for 1000 deterministic points around a 100x100 grid.
fn bench_nearest_planar(c: &mut Criterion) {
    let grid = PlanarIndex::new(Extent2::new(100, 100), Variant::Corner).unwrap();
    let probes = probe_points(1000, 60.0);

    c.bench_function("nearest_planar", |b| {
        b.iter(|| {
            for p in &probes {
                black_box(grid.nearest_index(&[p[0], p[1]]).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_round_trip_planar_10k,
    bench_round_trip_volume_corner,
    bench_to_node_sphere_15,
    bench_to_index_sphere_180,
    bench_nearest_planar
);
criterion_main!(benches);

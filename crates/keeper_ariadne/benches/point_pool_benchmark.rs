//! # Point Pool Benchmark
//!
//! REQUIREMENTS:
//! - allocate + dispose in constant time regardless of occupancy
//! - a full-table replan (4499 points) well inside one 60Hz tick
//!
//! Run with: `cargo bench --package keeper_ariadne`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keeper_ariadne::{PointId, PointPool, SharedPointPool, POINTS_COUNT};

/// Benchmark: single allocate/dispose pair at various fill levels.
fn bench_allocate_dispose(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_dispose");

    for fill in [0, POINTS_COUNT / 2, POINTS_COUNT - 2] {
        group.bench_with_input(BenchmarkId::from_parameter(fill), &fill, |b, &fill| {
            let mut pool = PointPool::new();
            let mut held = Vec::with_capacity(fill);
            pool.allocate_batch(fill, &mut held).unwrap();

            b.iter(|| {
                let id = pool.allocate().unwrap();
                black_box(pool.dispose(black_box(id)))
            });
        });
    }

    group.finish();
}

/// Benchmark: plan a full route table, write every waypoint, tear it down.
fn bench_full_replan(c: &mut Criterion) {
    let mut pool = PointPool::new();
    let capacity = pool.capacity();
    let mut route: Vec<PointId> = Vec::with_capacity(capacity);

    c.bench_function("full_replan_4499", |b| {
        b.iter(|| {
            route.clear();
            pool.allocate_batch(capacity, &mut route).unwrap();
            for (i, &id) in route.iter().enumerate() {
                let v = (i & 0x7fff) as i16;
                pool.set(id, v, -v).unwrap();
            }
            black_box(pool.dispose_all(route.iter().copied()))
        });
    });
}

/// Benchmark: waypoint comparison, valid and invalid ids.
fn bench_equals(c: &mut Criterion) {
    let mut pool = PointPool::new();
    let id = pool.allocate_at(120, 64).unwrap();
    let bad = PointId::from_raw(-1);

    c.bench_function("equals_valid", |b| {
        b.iter(|| black_box(pool.equals(black_box(id), 120, 64)));
    });
    c.bench_function("equals_invalid", |b| {
        b.iter(|| black_box(pool.equals(black_box(bad), 0, 0)));
    });
}

/// Benchmark: uncontended lock overhead of the shared handle.
fn bench_shared_allocate_dispose(c: &mut Criterion) {
    let shared = SharedPointPool::new(PointPool::new());

    c.bench_function("shared_allocate_dispose", |b| {
        b.iter(|| {
            let id = shared.allocate().unwrap();
            black_box(shared.dispose(id))
        });
    });
}

criterion_group!(
    benches,
    bench_allocate_dispose,
    bench_full_replan,
    bench_equals,
    bench_shared_allocate_dispose
);
criterion_main!(benches);

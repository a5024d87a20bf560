//! Benchmarks for Schism component discovery
//!
//! Measures performance of:
//! - Discovery over a fully connected relation (one component)
//! - Discovery over a ring relation (one component, sparse edges)
//! - Discovery over a fully partitioned relation (all singletons)
//! - BitIndexSet iteration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use schism_graph::{find_components, BitIndexSet};

/// Benchmark discovery when every pair is mutually reachable
fn bench_full_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_components/full_mesh");

    for &n in &[8usize, 32, 128, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| find_components(black_box(n), |_| false, |_, _| true))
        });
    }
    group.finish();
}

/// Benchmark discovery over a directed ring (worst-case sparse traversal)
fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_components/ring");

    for &n in &[8usize, 32, 128, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| find_components(black_box(n), |_| false, |a, b| (a + 1) % n == b))
        });
    }
    group.finish();
}

/// Benchmark discovery when nothing is reachable (all singletons)
fn bench_partitioned(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_components/partitioned");

    for &n in &[8usize, 32, 128, 512] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| find_components(black_box(n), |_| false, |_, _| false))
        });
    }
    group.finish();
}

/// Benchmark iteration over a half-full bitset
fn bench_bitset_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitset/iter");

    for &n in &[64usize, 1024, 16_384] {
        let mut set = BitIndexSet::new(n);
        for idx in (0..n).step_by(2) {
            set.insert(idx);
        }
        group.throughput(Throughput::Elements((n / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &set, |b, set| {
            b.iter(|| black_box(set).iter().sum::<usize>())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_mesh,
    bench_ring,
    bench_partitioned,
    bench_bitset_iter
);
criterion_main!(benches);

//! Benchmark for ChainedHashMap vs standard HashMap.

use coffer::ChainedHashMap;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("ChainedHashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = ChainedHashMap::new();
                    for index in 0..size {
                        map.put(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("ChainedHashMap/presized", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = ChainedHashMap::new();
                    map.reserve(size);
                    for index in 0..size {
                        map.put(black_box(index), black_box(index * 2));
                    }
                    black_box(map)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = HashMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1_000, 10_000] {
        let chained_map: ChainedHashMap<usize, usize> =
            (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: HashMap<usize, usize> =
            (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("ChainedHashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in 0..size {
                        if let Some(&value) = chained_map.get(&black_box(key)) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [1_000, 10_000] {
        let chained_map: ChainedHashMap<usize, usize> = (0..size).map(|index| (index, index)).collect();
        let standard_map: HashMap<usize, usize> = (0..size).map(|index| (index, index)).collect();

        group.bench_with_input(
            BenchmarkId::new("ChainedHashMap", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || chained_map.clone(),
                    |mut map| {
                        for key in 0..size {
                            black_box(map.remove(&key));
                        }
                        map
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("HashMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for key in 0..size {
                        black_box(map.remove(&key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_put, benchmark_get, benchmark_remove);

criterion_main!(benches);

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jet_permutation::encoding::table_len;
use jet_permutation::{PermutationEngine, PermutationTable};

/// Jet multiplicities we benchmark.
const JET_COUNTS: &[usize] = &[4, 5, 6, 7];

const PRIMES: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Table Build");

    for &count in JET_COUNTS {
        group.throughput(Throughput::Elements(table_len(count as u64)));
        group.bench_with_input(BenchmarkId::new("build", count), &count, |bencher, &count| {
            bencher.iter(|| PermutationTable::build(black_box(&PRIMES[..count])))
        });
    }

    group.finish();
}

fn bench_reuse_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reuse Walk");

    for &count in JET_COUNTS {
        let jets: Vec<usize> = (0..count).collect();
        let mut engine = PermutationEngine::new();
        // Build once; every iteration below hits the cache.
        engine.init(&jets).unwrap();

        group.throughput(Throughput::Elements(2 * table_len(count as u64)));
        group.bench_with_input(BenchmarkId::new("walk", count), &count, |bencher, _| {
            bencher.iter(|| {
                let mut total = 0usize;
                for split in engine.splits(black_box(&jets)).unwrap() {
                    let split = split.unwrap();
                    total += split.leptonic.len() + split.hadronic.len();
                }
                total
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_reuse_walk);
criterion_main!(benches);

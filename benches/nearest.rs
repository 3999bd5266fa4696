use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grid_knn::{AnyFinder, FinderKind, NearestFinder, DEFAULT_K};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: u32 = 2000;
const HEIGHT: u32 = 2000;
const NUM_QUERIES: usize = 200;

/// Entry counts to compare the finders at
const NUM_ENTRIES: [u32; 2] = [5_000, 20_000];

/// Load `num_entries` entries on unique cells into one finder of each kind, and draw the queries.
fn setup(num_entries: u32) -> (Vec<AnyFinder>, Vec<(i64, i64)>) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut finders: Vec<AnyFinder> = FinderKind::ALL
        .into_iter()
        .map(|kind| AnyFinder::new(kind, WIDTH, HEIGHT).unwrap())
        .collect();

    let mut used = HashSet::with_capacity(num_entries as usize);
    for id in 0..num_entries {
        let (x, y) = loop {
            let x = rng.gen_range(0..WIDTH as i64);
            let y = rng.gen_range(0..HEIGHT as i64);
            if used.insert((x, y)) {
                break (x, y);
            }
        };
        for finder in finders.iter_mut() {
            finder.upsert(id, x, y).unwrap();
        }
    }

    let queries = (0..NUM_QUERIES)
        .map(|_| (rng.gen_range(0..WIDTH as i64), rng.gen_range(0..HEIGHT as i64)))
        .collect();
    (finders, queries)
}

fn run(finder: &mut AnyFinder, queries: &[(i64, i64)]) -> u32 {
    let mut checksum = 0;
    for &(x, y) in queries {
        let result = finder.find_nearest(x, y, DEFAULT_K).unwrap();
        if let Some(first) = result.first() {
            checksum ^= first.id;
        }
    }
    checksum
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_nearest");
    for num_entries in NUM_ENTRIES {
        let (mut finders, queries) = setup(num_entries);
        for finder in finders.iter_mut() {
            // warm the kd-tree so the first sample does not pay for the rebuild
            run(finder, &queries[..1]);
            group.bench_with_input(
                BenchmarkId::new(finder.kind().as_str(), num_entries),
                &num_entries,
                |b, _| b.iter(|| run(finder, &queries)),
            );
        }
    }
    group.finish();

    // a freshly loaded kd-tree finder is stale, so every clone pays for a full rebuild
    let (mut finders, _) = setup(5_000);
    let kd = finders.pop().unwrap();
    c.bench_function("kd-tree rebuild (5000 entries)", |b| {
        b.iter(|| kd.clone().find_nearest(0, 0, 1).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

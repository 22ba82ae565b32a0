use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rangescan::fixture::{self, FixtureConfig};
use rangescan::{
    MatrixPrefixSums, PrefixSums, longest_unique_run, longest_within_limit, min_subarray_len,
};

fn bench_prefix(c: &mut Criterion) {
    let config = FixtureConfig { len: 4096, ..FixtureConfig::default() };
    let nums = fixture::values(1, &config);
    let sums = PrefixSums::new(&nums).unwrap();

    c.bench_function("prefix_build_4096", |b| {
        b.iter(|| PrefixSums::new(black_box(&nums)))
    });
    c.bench_function("sum_range", |b| {
        b.iter(|| sums.sum_range(black_box(17), black_box(4000)))
    });

    let row_config = FixtureConfig { len: 128, ..FixtureConfig::default() };
    let mat: Vec<Vec<i64>> = (0..128)
        .map(|r| fixture::values(r as u64, &row_config))
        .collect();
    let ms = MatrixPrefixSums::new(&mat).unwrap();
    c.bench_function("sum_region_128x128", |b| {
        b.iter(|| ms.sum_region(black_box(3), black_box(5), black_box(120), black_box(110)))
    });
}

fn bench_windows(c: &mut Criterion) {
    let config = FixtureConfig { len: 4096, max_value: 24, ..FixtureConfig::default() };

    let items = fixture::values(2, &config);
    c.bench_function("longest_unique_run_4096", |b| {
        b.iter(|| longest_unique_run(black_box(&items)))
    });
    c.bench_function("longest_within_limit_4096", |b| {
        b.iter(|| longest_within_limit(black_box(&items), black_box(10)))
    });

    let sums = fixture::positive_values(3, &config);
    c.bench_function("min_subarray_len_4096", |b| {
        b.iter(|| min_subarray_len(black_box(50_000), black_box(&sums)))
    });
}

criterion_group!(benches, bench_prefix, bench_windows);
criterion_main!(benches);

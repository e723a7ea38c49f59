use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pradix::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn key(v: &u64) -> u64 {
    *v
}

fn bench_random_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random u64");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 100_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.bench_function("sort_in_place (1 thread)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| sort_in_place(black_box(&mut data), key, ByKey(key), u64::MAX, 1),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("sort_copy (1 thread)", |b| {
        b.iter_batched(
            || vec![0u64; count],
            |mut out| sort_copy(black_box(&input), &mut out, key, ByKey(key), u64::MAX, 1),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(|| input.clone(), |mut data| data.sort(), BatchSize::SmallInput)
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_cutoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cutoff");
    group.sample_size(10);

    // Narrow key range: the cutoff decides how much work the comparator does.
    let mut rng = rand::rng();
    let count = 100_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random_range(0..1 << 20)).collect();

    for cutoff in [64, 512, 2000, 8000] {
        let config = SortConfig::default().with_cutoff(cutoff);
        group.bench_function(format!("sort_in_place (cutoff {cutoff})"), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    sort_in_place_with(black_box(&mut data), key, ByKey(key), (1 << 20) - 1, &config)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_keys, bench_cutoff);
criterion_main!(benches);

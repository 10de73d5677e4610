use std::time::Instant;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use lfukit::policy::lfu::LfuCache;
use lfukit::traits::{CoreCache, LfuCacheTrait};

fn bench_lfu_insert_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu");
    let ops_per_iter = 1024u64 * 2;
    group.throughput(Throughput::Elements(ops_per_iter));
    group.bench_function("insert_get", |b| {
        b.iter_batched(
            || {
                let mut cache = LfuCache::with_capacity(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    cache.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lfu_get_hotset(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("get_hotset", |b| {
        b.iter_batched(
            || {
                let mut cache = LfuCache::with_capacity(4096);
                for i in 0..4096u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lfu_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("eviction_churn", |b| {
        b.iter_batched(
            || {
                let mut cache = LfuCache::with_capacity(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    cache.insert(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lfu_eviction_churn_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu_eviction_churn_sizes");
    for &capacity in &[256usize, 1024, 4096, 16384] {
        let inserts = capacity * 4;
        group.throughput(Throughput::Elements(inserts as u64));
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &capacity| {
                b.iter_batched(
                    || {
                        let mut cache = LfuCache::with_capacity(capacity);
                        for i in 0..capacity as u64 {
                            cache.insert(i, i);
                        }
                        cache
                    },
                    |mut cache| {
                        for i in 0..inserts as u64 {
                            cache.insert(std::hint::black_box(10_000 + i), i);
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_lfu_pop_lfu(c: &mut Criterion) {
    c.bench_function("lfu_pop_lfu", |b| {
        b.iter_batched(
            || {
                let mut cache = LfuCache::with_capacity(1024);
                for i in 0..1024u64 {
                    cache.insert(i, i);
                }
                cache
            },
            |mut cache| {
                for _ in 0..1024u64 {
                    let _ = std::hint::black_box(cache.pop_lfu());
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lfu_get_hit_ns(c: &mut Criterion) {
    c.bench_function("lfu_get_hit_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 16_384u64;
            let mut cache = LfuCache::with_capacity(capacity as usize);
            for i in 0..capacity {
                cache.insert(i, i);
            }
            let start = Instant::now();
            for (idx, _) in (0..iters).enumerate() {
                let key = (idx as u64) % capacity;
                let _ = std::hint::black_box(cache.get(&key));
            }
            start.elapsed()
        })
    });
}

fn bench_lfu_insert_full_ns(c: &mut Criterion) {
    c.bench_function("lfu_insert_full_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 4096u64;
            let mut cache = LfuCache::with_capacity(capacity as usize);
            for i in 0..capacity {
                cache.insert(i, i);
            }
            let start = Instant::now();
            for i in 0..iters {
                let key = capacity + i;
                cache.insert(std::hint::black_box(key), i);
            }
            start.elapsed()
        })
    });
}

criterion_group!(
    ops,
    bench_lfu_insert_get,
    bench_lfu_get_hotset,
    bench_lfu_eviction_churn,
    bench_lfu_eviction_churn_sizes,
    bench_lfu_pop_lfu
);
criterion_group!(micro_ops, bench_lfu_get_hit_ns, bench_lfu_insert_full_ns);
criterion_main!(ops, micro_ops);

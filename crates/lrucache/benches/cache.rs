use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrucache::{LruCache, SharedCache};

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit_1k_entries", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        for key in 0..1000u64 {
            cache.set(key, vec![b'x'; 64]);
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 1000)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_set_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_evicting");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_new_key_full_cache", |b| {
        let mut cache = LruCache::new(100).unwrap();
        for key in 0..100u64 {
            cache.set(key, key);
        }

        // Every key is new, so every set evicts
        let mut counter = 100u64;
        b.iter(|| {
            cache.set(black_box(counter), counter);
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write_shared", |b| {
        let cache = SharedCache::new(1000).unwrap();
        for key in 0..1000u64 {
            cache.set(key, key);
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 2000)));
            } else {
                cache.set(counter % 2000, counter);
            }
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_set_evicting, bench_mixed_50_50);
criterion_main!(benches);

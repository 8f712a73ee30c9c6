use std::thread;

use lrucache::{Error, LruCache, SharedCache};

fn order(cache: &LruCache<i32, i32>) -> Vec<i32> {
    cache.iter().map(|(k, _)| *k).collect()
}

#[test]
fn replays_reference_scenario() {
    let mut cache = LruCache::new(3).unwrap();

    cache.set(2, 3);
    cache.set(3, 4);
    cache.set(4, 5);
    assert_eq!(cache.get(&2), Some(&3));
    cache.set(5, 6);
    assert_eq!(cache.get(&2), Some(&3));
    assert_eq!(cache.get(&3), None);
    assert_eq!(cache.get(&4), Some(&5));
    cache.set(6, 7);
    cache.set(7, 8);
    assert_eq!(cache.get(&4), Some(&5));
    assert_eq!(cache.get(&2), None);

    assert_eq!(order(&cache), vec![4, 7, 6]);
}

#[test]
fn rejects_zero_capacity() {
    let err = LruCache::<i32, i32>::new(0).unwrap_err();
    assert_eq!(err, Error::InvalidCapacity(0));
    assert_eq!(err.to_string(), "invalid capacity: 0 (must be at least 1)");
}

#[test]
fn never_exceeds_capacity() {
    let mut cache = LruCache::new(5).unwrap();

    for key in 0..1_000 {
        cache.set(key % 37, key);
        assert!(cache.len() <= 5);
    }
    assert_eq!(cache.len(), 5);
}

#[test]
fn evicts_least_recently_accessed() {
    let mut cache = LruCache::new(3).unwrap();
    cache.set(1, 1);
    cache.set(2, 2);
    cache.set(3, 3);

    // Touch in an order that leaves 2 as the oldest.
    cache.get(&1);
    cache.set(3, 30);

    assert_eq!(cache.peek_lru(), Some((&2, &2)));
    assert_eq!(cache.push(4, 4), Some((2, 2)));
    assert_eq!(order(&cache), vec![4, 3, 1]);
}

#[test]
fn update_keeps_size_and_promotes() {
    let mut cache = LruCache::new(2).unwrap();
    cache.set(1, 10);
    cache.set(2, 20);

    cache.set(1, 11);

    assert_eq!(cache.len(), 2);
    assert_eq!(order(&cache), vec![1, 2]);
    assert_eq!(cache.peek(&1), Some(&11));
}

#[test]
fn shared_cache_across_threads() {
    let cache = SharedCache::new(512).unwrap();

    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let cache = cache.clone();
            thread::spawn(move || {
                for i in 0..100u64 {
                    let key = worker * 1_000 + i;
                    cache.set(key, i);
                    assert_eq!(cache.get(&key), Some(i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = cache.stats().snapshot();
    assert_eq!(cache.len(), 400);
    assert_eq!(stats.inserts, 400);
    assert_eq!(stats.hits, 400);
    assert_eq!(stats.evictions, 0);
}

//! SharedCache: an LRU cache handle that can be shared across threads

use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Thread-safe LRU cache with hit/miss statistics
///
/// Every call takes the same lock, so operations are applied one at a
/// time. Lookups reorder recency, which is why this is a `Mutex` and not
/// an `RwLock`. Clones share the same cache and statistics.
pub struct SharedCache<K, V> {
    /// LRU cache guarded for exclusive access
    cache: Arc<Mutex<LruCache<K, V>>>,

    /// Cache statistics
    stats: Arc<CacheStats>,
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new shared cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of items in cache
    ///
    /// # Returns
    /// * `Result<SharedCache>` - Error if `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity)?)),
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Get a copy of a value, marking it most recently used
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        let value = self.cache.lock().get(key).cloned();

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }

        value
    }

    /// Insert or update a value, evicting the least recently used entry if full
    pub fn set(&self, key: K, value: V) {
        let (existed, evicted) = {
            let mut cache = self.cache.lock();
            let existed = cache.contains(&key);
            (existed, cache.push(key, value))
        };

        if existed {
            self.stats.record_update();
        } else {
            self.stats.record_insert();
        }
        if evicted.is_some() {
            self.stats.record_eviction();
        }
    }

    /// Check whether a key is resident, without touching its recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.cache.lock().contains(key)
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> NonZeroUsize {
        self.cache.lock().capacity()
    }

    /// Clear the cache and its statistics
    pub fn clear(&self) {
        self.cache.lock().clear();
        self.stats.reset();
    }
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            stats: Arc::clone(&self.stats),
        }
    }
}

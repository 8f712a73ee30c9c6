//! LRU (Least Recently Used) cache implementation
//!
//! Entries live in a vector arena linked into a doubly-linked recency list
//! (head = most recent, tail = least recent). The index maps each key to the
//! arena slot holding its entry, so lookup, promotion and eviction are O(1).
//! Freed slots are recycled through a free list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Node in the LRU doubly-linked list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU cache with fixed capacity
///
/// Capacity counts entries. Once the cache is full, inserting a new key
/// evicts the entry whose last `get` or `set` lies furthest in the past.
///
/// ```
/// use lrucache::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.set("a", 1);
/// cache.set("b", 2);
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// cache.set("c", 3); // evicts "b"
/// assert_eq!(cache.get(&"b"), None);
/// ```
pub struct LruCache<K, V, S = RandomState> {
    map: HashMap<K, usize, S>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: NonZeroUsize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache holding at most `capacity` entries
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or(Error::InvalidCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Create a new LRU cache from an already validated capacity
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::with_hasher(capacity, RandomState::new())
    }
}

impl<K, V, S> LruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Create a new LRU cache whose index uses `hasher`
    pub fn with_hasher(capacity: NonZeroUsize, hasher: S) -> Self {
        debug!(capacity = capacity.get(), "creating LRU cache");

        Self {
            map: HashMap::with_capacity_and_hasher(capacity.get(), hasher),
            nodes: Vec::with_capacity(capacity.get()),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
        }
    }

    /// Get a value from the cache, marking it most recently used
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Insert or update a key-value pair, marking it most recently used
    pub fn set(&mut self, key: K, value: V) {
        self.push(key, value);
    }

    /// Insert or update a key-value pair, returning the evicted entry
    ///
    /// Updating an existing key never evicts, so this returns `None` in that
    /// case. Inserting a new key into a full cache returns the least
    /// recently used pair that made room for it.
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.map.len() >= self.capacity.get() {
            self.evict()
        } else {
            None
        };

        let idx = self.alloc_node(Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.attach_front(idx);
        self.map.insert(key, idx);

        debug_assert!(self.map.len() <= self.capacity.get());
        evicted
    }

    /// Get a value without touching its recency
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Check whether a key is resident, without touching its recency
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);
        self.attach_front(idx);
    }

    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(head_idx) => {
                if let Some(head) = &mut self.nodes[head_idx] {
                    head.prev = Some(idx);
                }
            }
            None => {
                self.tail = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let tail_idx = self.tail?;

        // Unlink while the node is still in place so the neighbours are fixed up.
        self.unlink(tail_idx);
        let node = self.nodes[tail_idx].take()?;
        self.free_list.push(tail_idx);
        self.map.remove(&node.key);

        trace!(slot = tail_idx, len = self.map.len(), "evicted least recently used entry");
        Some((node.key, node.value))
    }

    fn alloc_node(&mut self, node: Node<K, V>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(Some(node));
            idx
        }
    }

    /// Walk the list and panic on any index/sequence disagreement
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut cursor = self.head;

        while let Some(idx) = cursor {
            let node = self.nodes[idx].as_ref().expect("linked slot must be occupied");
            assert_eq!(node.prev, prev, "broken back link at slot {idx}");
            assert_eq!(self.map.get(&node.key), Some(&idx), "index disagrees at slot {idx}");
            count += 1;
            assert!(count <= self.map.len(), "list is longer than the index");
            prev = Some(idx);
            cursor = node.next;
        }

        assert_eq!(self.tail, prev, "tail does not match last linked node");
        assert_eq!(count, self.map.len(), "index holds orphaned keys");
        assert!(count <= self.capacity.get(), "capacity exceeded");
        assert_eq!(count + self.free_list.len(), self.nodes.len(), "leaked arena slots");
    }
}

impl<K, V, S> LruCache<K, V, S> {
    /// Get the current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries the cache holds
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// The entry that would be evicted next
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.entry_at(self.tail)
    }

    /// The most recently used entry
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.entry_at(self.head)
    }

    /// Iterate from most to least recently used without touching recency
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.map.len(),
        }
    }

    /// Drop every entry; the cache stays usable with the same capacity
    pub fn clear(&mut self) {
        debug!(dropped = self.map.len(), "clearing LRU cache");

        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn entry_at(&self, idx: Option<usize>) -> Option<(&K, &V)> {
        self.nodes[idx?].as_ref().map(|node| (&node.key, &node.value))
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over cache entries, most recently used first
pub struct Iter<'a, K, V> {
    nodes: &'a [Option<Node<K, V>>],
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes[self.next?].as_ref()?;
        self.next = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

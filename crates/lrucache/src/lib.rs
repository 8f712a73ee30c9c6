//! # lrucache
//!
//! Fixed-capacity in-memory key/value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to arena slot (O(1))
//! - **LRU List**: Index-linked doubly-linked list for promotion and eviction (O(1))
//! - **SharedCache**: Mutex-guarded handle with hit/miss statistics for
//!   callers that share one cache between threads
//!
//! Capacity counts entries and must be at least 1. A lookup of a missing key
//! returns `None`; the only error is an invalid capacity at construction.

#![warn(missing_docs)]

mod cache;
mod error;
mod lru;
mod stats;

pub use cache::SharedCache;
pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
pub use stats::{CacheStats, StatsSnapshot};

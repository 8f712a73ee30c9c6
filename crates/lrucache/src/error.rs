//! Error types for lrucache

use thiserror::Error;

/// Result type alias for lrucache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a cache
///
/// Lookups never fail: a missing key is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Capacity must hold at least one entry
    #[error("invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),
}

//! Configuration for runtime-sized lists.

use crate::error::ListError;

/// Configuration for a [`HeapList`](crate::HeapList).
///
/// Only the capacity is configurable. It is validated when the list is
/// built and fixed for the list's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of slots in the arena.
    ///
    /// Default: 64. Must be non-zero.
    pub capacity: usize,
}

impl ListConfig {
    /// Default slot count.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create a config for the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check that the config describes a usable arena.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.capacity == 0 {
            return Err(ListError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

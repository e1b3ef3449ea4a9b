//! List-specific error types.

use std::fmt;

use thiserror::Error;

use crate::audit::Chain;

/// Errors that can occur while constructing or reading a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ListError {
    /// A runtime-sized list was requested with zero slots.
    #[error("list capacity must be greater than zero")]
    ZeroCapacity,
    /// A slot lookup landed outside `[0, capacity)`.
    ///
    /// Reading the front of an empty list reports the sentinel index here.
    #[error("slot index {index} out of range for capacity {capacity}")]
    OutOfRange {
        /// The index that was looked up.
        index: usize,
        /// Number of slots in the arena.
        capacity: usize,
    },
}

/// Returned by [`try_push_front`](crate::ArenaList::try_push_front) when
/// every slot is already on the active chain.
///
/// Carries the rejected value so the caller can retry or divert it.
#[derive(Clone, Copy, PartialEq, Eq, Error)]
#[error("list is full: all {capacity} slots are in use")]
pub struct PushError<T> {
    value: T,
    capacity: usize,
}

impl<T> PushError<T> {
    pub(crate) fn new(value: T, capacity: usize) -> Self {
        Self { value, capacity }
    }

    /// Capacity of the list that rejected the push.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recover the value that could not be stored.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// A broken chain invariant found by [`ArenaList::audit`](crate::ArenaList::audit).
///
/// The public API never produces these states; the audit exists so tests and
/// debug builds can prove that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AuditError {
    /// The cached element count disagrees with the active chain length.
    #[error("cached count {cached} but active chain holds {walked} slots")]
    CountMismatch {
        /// Value of the cached counter.
        cached: usize,
        /// Slots actually reachable from the head.
        walked: usize,
    },
    /// A link points past the sentinel.
    #[error("{chain} chain links to index {target}, capacity is {capacity}")]
    LinkOutOfRange {
        /// Chain the bad link was found on.
        chain: Chain,
        /// The offending link value.
        target: usize,
        /// Number of slots in the arena.
        capacity: usize,
    },
    /// A chain revisits one of its own slots.
    #[error("{chain} chain revisits slot {index}")]
    Cycle {
        /// Chain containing the cycle.
        chain: Chain,
        /// First slot seen twice.
        index: usize,
    },
    /// A slot is linked into both chains.
    #[error("slot {index} is on both the active and free chains")]
    Overlap {
        /// The shared slot.
        index: usize,
    },
    /// A slot is on neither chain.
    #[error("slot {index} is not reachable from either chain")]
    Unreachable {
        /// The orphaned slot.
        index: usize,
    },
}

//! Slots and the storage backends that hold them.
//!
//! A [`Slot`] pairs a value with the index of its successor. The same slot
//! type serves the active chain and the free chain; which chain a slot is on
//! is decided purely by which head reaches it.
//!
//! [`Storage`] abstracts over where the slot array lives. Two backends are
//! provided:
//!
//! - `[Slot<T>; N]`: inline, sized at compile time, never allocates.
//! - `Box<[Slot<T>]>`: sized at runtime, allocated once at construction.

use std::fmt;

/// One arena entry: a value and the index of the next slot in its chain.
///
/// `next == capacity` is the sentinel meaning "end of chain".
#[derive(Clone, PartialEq, Eq)]
pub struct Slot<T> {
    pub(crate) value: T,
    pub(crate) next: usize,
}

impl<T> Slot<T> {
    pub(crate) fn new(value: T, next: usize) -> Self {
        Self { value, next }
    }

    /// The stored value. Free slots keep their last value until reused.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Index of the successor slot, or the capacity if this slot ends its chain.
    pub fn next(&self) -> usize {
        self.next
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({:?} -> {})", self.value, self.next)
    }
}

/// Fixed-length backing store for an [`ArenaList`](crate::ArenaList).
///
/// Implementors must never change the length of the slice they return;
/// the list derives its capacity and sentinel from it.
pub trait Storage<T> {
    /// The slot array, in index order.
    fn slots(&self) -> &[Slot<T>];

    /// Mutable access to the slot array, in index order.
    fn slots_mut(&mut self) -> &mut [Slot<T>];
}

impl<T, const N: usize> Storage<T> for [Slot<T>; N] {
    #[inline]
    fn slots(&self) -> &[Slot<T>] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [Slot<T>] {
        self
    }
}

impl<T> Storage<T> for Box<[Slot<T>]> {
    #[inline]
    fn slots(&self) -> &[Slot<T>] {
        self
    }

    #[inline]
    fn slots_mut(&mut self) -> &mut [Slot<T>] {
        self
    }
}

/// Successor of slot `index` on a freshly linked free chain.
///
/// The free chain runs `N-1 -> N-2 -> ... -> 0 -> sentinel`, so slot 0 ends
/// it and every other slot points one to its left.
#[inline]
pub(crate) fn descending_next(index: usize, capacity: usize) -> usize {
    if index == 0 {
        capacity
    } else {
        index - 1
    }
}

/// Reset every slot to `default` and relink them as a descending free chain.
pub(crate) fn relink_descending<T: Clone>(slots: &mut [Slot<T>], default: &T) {
    let capacity = slots.len();
    for (index, slot) in slots.iter_mut().enumerate() {
        slot.value = default.clone();
        slot.next = descending_next(index, capacity);
    }
}

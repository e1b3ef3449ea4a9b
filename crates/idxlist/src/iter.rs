//! Front-to-back iteration over the active chain.

use std::iter::FusedIterator;

use crate::slot::Slot;

/// Borrowing iterator over an [`ArenaList`](crate::ArenaList), newest first.
///
/// Follows `next` links from the head. The remaining count is carried
/// alongside so the iterator reports an exact length.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    current: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Slot<T>], head: usize, len: usize) -> Self {
        Self {
            slots,
            current: head,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.slots.get(self.current)?;
        self.current = slot.next;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

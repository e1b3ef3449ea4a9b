//! The index-linked arena list.
//!
//! [`ArenaList`] keeps two singly-linked chains inside one slot array:
//!
//! ```text
//! slots:      [ 0 ][ 1 ][ 2 ][ 3 ][ 4 ]     sentinel = 5
//! head      ─► 4 ─► 1 ─► 5                  active chain (newest first)
//! free_head ─► 3 ─► 2 ─► 0 ─► 5             free chain (next to reuse first)
//! ```
//!
//! Pushing pops a slot off the free chain and links it in front of `head`;
//! popping and removal push slots back onto the free chain. Nothing is ever
//! allocated after construction.

use std::fmt;
use std::marker::PhantomData;

use crate::config::ListConfig;
use crate::error::{ListError, PushError};
use crate::iter::Iter;
use crate::slot::{descending_next, relink_descending, Slot, Storage};

/// Fixed-capacity singly-linked list whose links are slot indices.
///
/// Generic over its [`Storage`]; use the [`FixedList`] or [`HeapList`]
/// aliases rather than naming the storage directly.
///
/// # Thread Safety
///
/// Not synchronised. Every mutator takes `&mut self`; wrap the list in a lock
/// to share it between threads.
#[derive(Clone)]
pub struct ArenaList<T, S> {
    /// Backing slot array; its length is the capacity and the sentinel.
    pub(crate) slots: S,
    /// First live slot, or the sentinel when empty.
    pub(crate) head: usize,
    /// Next slot to hand out, or the sentinel when full.
    pub(crate) free_head: usize,
    /// Length of the active chain.
    pub(crate) count: usize,
    _marker: PhantomData<T>,
}

/// Arena list stored inline; capacity `N` is fixed at compile time.
pub type FixedList<T, const N: usize> = ArenaList<T, [Slot<T>; N]>;

/// Arena list whose slot array is allocated once, at construction.
pub type HeapList<T> = ArenaList<T, Box<[Slot<T>]>>;

impl<T: Clone, const N: usize> ArenaList<T, [Slot<T>; N]> {
    /// Create an empty list with every slot holding `default`.
    ///
    /// A capacity of zero is rejected at compile time.
    pub fn new(default: T) -> Self {
        const { assert!(N > 0, "FixedList capacity must be greater than zero") };
        let slots =
            std::array::from_fn(|index| Slot::new(default.clone(), descending_next(index, N)));
        Self::from_storage(slots)
    }
}

impl<T: Clone> ArenaList<T, Box<[Slot<T>]>> {
    /// Create an empty list of `capacity` slots, each holding `default`.
    pub fn with_capacity(capacity: usize, default: T) -> Result<Self, ListError> {
        Self::from_config(&ListConfig::new(capacity), default)
    }

    /// Create an empty list sized by `config`.
    pub fn from_config(config: &ListConfig, default: T) -> Result<Self, ListError> {
        config.validate()?;
        let capacity = config.capacity;
        let slots: Box<[Slot<T>]> = (0..capacity)
            .map(|index| Slot::new(default.clone(), descending_next(index, capacity)))
            .collect();
        Ok(Self::from_storage(slots))
    }
}

impl<T, S: Storage<T>> ArenaList<T, S> {
    /// Wrap storage whose slots already form a descending free chain.
    fn from_storage(slots: S) -> Self {
        let capacity = slots.slots().len();
        debug_assert!(capacity > 0);
        Self {
            slots,
            head: capacity,
            free_head: capacity - 1,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Number of slots in the arena. Never changes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.slots().len()
    }

    /// Number of elements on the active chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Number of slots still available for pushes.
    #[inline]
    pub fn free_len(&self) -> usize {
        self.capacity() - self.count
    }

    /// Whether the active chain is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.capacity()
    }

    /// Whether every slot is on the active chain.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// The most recently pushed element.
    ///
    /// On an empty list `head` is the sentinel, which lies one past the last
    /// slot, so the lookup fails with [`ListError::OutOfRange`].
    pub fn front(&self) -> Result<&T, ListError> {
        let capacity = self.capacity();
        self.slots
            .slots()
            .get(self.head)
            .map(|slot| &slot.value)
            .ok_or(ListError::OutOfRange {
                index: self.head,
                capacity,
            })
    }

    /// Mutable access to the most recently pushed element.
    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        let capacity = self.capacity();
        let head = self.head;
        self.slots
            .slots_mut()
            .get_mut(head)
            .map(|slot| &mut slot.value)
            .ok_or(ListError::OutOfRange {
                index: head,
                capacity,
            })
    }

    /// Push `value` onto the front of the list.
    ///
    /// When the list is full the value is dropped and the list is left
    /// untouched. Use [`try_push_front`](Self::try_push_front) to find out.
    pub fn push_front(&mut self, value: T) {
        if let Err(err) = self.try_push_front(value) {
            log::debug!("push_front dropped a value: {err}");
        }
    }

    /// Push `value` onto the front of the list, or hand it back if full.
    ///
    /// O(1): takes the slot at the head of the free chain.
    pub fn try_push_front(&mut self, value: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            return Err(PushError::new(value, self.capacity()));
        }

        let index = self.free_head;
        let slot = &mut self.slots.slots_mut()[index];
        self.free_head = slot.next;
        slot.value = value;
        slot.next = self.head;
        self.head = index;
        self.count += 1;
        Ok(())
    }

    /// Unlink the front element and recycle its slot. No-op when empty.
    ///
    /// The value is not returned; read it with [`front`](Self::front) first.
    /// It stays in the slot until the slot is reused or the list is cleared.
    pub fn pop_front(&mut self) {
        if self.is_empty() {
            return;
        }

        let index = self.head;
        self.head = self.slots.slots()[index].next;
        self.release(index);
    }

    /// Remove every element equal to `value`, returning how many were removed.
    ///
    /// Single forward pass. After a match is unlinked, its successor now sits
    /// at the same link position and is examined next.
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let sentinel = self.capacity();
        let mut removed = 0;
        // Slot owning the link under examination; `None` is `head` itself.
        let mut link_owner: Option<usize> = None;
        let mut current = self.head;

        while current != sentinel {
            let slot = &self.slots.slots()[current];
            let next = slot.next;
            if slot.value == *value {
                match link_owner {
                    None => self.head = next,
                    Some(owner) => self.slots.slots_mut()[owner].next = next,
                }
                self.release(current);
                removed += 1;
            } else {
                link_owner = Some(current);
            }
            current = next;
        }

        removed
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Reset to the post-construction state, filling every slot with `default`.
    ///
    /// The free chain is rebuilt in the same descending order as a new list,
    /// so later pushes land in exactly the same slots.
    pub fn clear_with(&mut self, default: T)
    where
        T: Clone,
    {
        let capacity = self.capacity();
        relink_descending(self.slots.slots_mut(), &default);
        self.head = capacity;
        self.free_head = capacity - 1;
        self.count = 0;
        log::trace!("cleared arena list of capacity {capacity}");
    }

    /// Reset to the post-construction state using `T::default()`.
    pub fn clear(&mut self)
    where
        T: Clone + Default,
    {
        self.clear_with(T::default());
    }

    /// Raw view of the arena in slot-index order, free slots included.
    pub fn as_slots(&self) -> &[Slot<T>] {
        self.slots.slots()
    }

    /// Iterate front to back (newest to oldest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.slots.slots(), self.head, self.count)
    }

    /// Push `index` onto the free chain.
    fn release(&mut self, index: usize) {
        self.slots.slots_mut()[index].next = self.free_head;
        self.free_head = index;
        self.count -= 1;
    }
}

impl<T: Clone + Default, const N: usize> Default for ArenaList<T, [Slot<T>; N]> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug, S: Storage<T>> fmt::Debug for ArenaList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a ArenaList<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone, S: Storage<T>>(list: &ArenaList<T, S>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn empty_list() {
        let list: FixedList<u32, 10> = FixedList::default();
        assert!(list.is_empty());
        assert!(!list.is_full());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 10);
        assert_eq!(list.free_len(), 10);
    }

    #[test]
    fn full_list() {
        let mut list: FixedList<u32, 10> = FixedList::default();
        for i in 0..10 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 10);
        assert_eq!(list.capacity(), 10);
        assert!(list.is_full());
        assert_eq!(list.free_head, 10, "free chain exhausted");
    }

    #[test]
    fn clearing_list() {
        let mut list: FixedList<u32, 10> = FixedList::default();
        for i in 0..10 {
            list.push_front(i);
        }
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 10);
    }

    #[test]
    fn clear_then_add() {
        let mut list: FixedList<u32, 10> = FixedList::default();
        for i in 0..10 {
            list.push_front(i);
        }
        list.clear();
        list.push_front(3);
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Ok(&3));
    }

    #[test]
    fn remove_drops_every_match() {
        let mut list: FixedList<u32, 10> = FixedList::default();
        list.push_front(3);
        list.push_front(3);
        list.push_front(3);
        list.push_front(2);

        assert_eq!(list.remove(&3), 3);
        assert_eq!(list.len(), 1);
        assert_eq!(collect(&list), vec![2]);
    }

    #[test]
    fn remove_at_head_middle_and_tail() {
        let mut list: FixedList<u32, 8> = FixedList::default();
        for v in [7, 1, 7, 2, 7] {
            list.push_front(v);
        }
        // Front to back: 7 2 7 1 7
        assert_eq!(list.remove(&7), 3);
        assert_eq!(collect(&list), vec![2, 1]);
        assert_eq!(list.free_len(), 6);
    }

    #[test]
    fn remove_missing_value_is_noop() {
        let mut list: FixedList<u32, 4> = FixedList::default();
        list.push_front(1);
        list.push_front(2);
        assert_eq!(list.remove(&9), 0);
        assert_eq!(collect(&list), vec![2, 1]);
    }

    #[test]
    fn remove_on_empty_list_is_noop() {
        let mut list: FixedList<u32, 4> = FixedList::default();
        assert_eq!(list.remove(&0), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_everything_empties_list() {
        let mut list: FixedList<u32, 4> = FixedList::default();
        for _ in 0..4 {
            list.push_front(5);
        }
        assert_eq!(list.remove(&5), 4);
        assert!(list.is_empty());
        assert_eq!(list.front(), Err(ListError::OutOfRange { index: 4, capacity: 4 }));
    }

    #[test]
    fn front_on_new_list_is_out_of_range() {
        let list: FixedList<u32, 10> = FixedList::default();
        assert_eq!(
            list.front(),
            Err(ListError::OutOfRange {
                index: 10,
                capacity: 10
            })
        );
    }

    #[test]
    fn front_after_clear_is_out_of_range() {
        let mut list: FixedList<u32, 3> = FixedList::new(42);
        list.push_front(1);
        list.clear_with(42);
        assert!(matches!(list.front(), Err(ListError::OutOfRange { .. })));
    }

    #[test]
    fn front_mut_updates_value() {
        let mut list: FixedList<u32, 3> = FixedList::default();
        list.push_front(1);
        *list.front_mut().unwrap() = 10;
        assert_eq!(list.front(), Ok(&10));
        list.pop_front();
        assert!(list.front_mut().is_err());
    }

    #[test]
    fn lifo_order() {
        let mut list: FixedList<u32, 5> = FixedList::default();
        for v in 1..=5 {
            list.push_front(v);
        }
        let mut popped = Vec::new();
        while let Ok(&v) = list.front() {
            popped.push(v);
            list.pop_front();
        }
        assert_eq!(popped, vec![5, 4, 3, 2, 1]);
        assert!(list.is_empty());
    }

    #[test]
    fn pop_on_empty_list_is_noop() {
        let mut list: FixedList<u32, 2> = FixedList::default();
        list.pop_front();
        assert!(list.is_empty());
        assert_eq!(list.free_head, 1);
    }

    #[test]
    fn push_beyond_capacity_is_silent_noop() {
        let mut list: FixedList<u32, 3> = FixedList::default();
        for v in 1..=4 {
            list.push_front(v);
        }
        assert_eq!(list.len(), 3);
        assert!(!list.contains(&4));
        assert_eq!(collect(&list), vec![3, 2, 1]);
    }

    #[test]
    fn try_push_front_returns_value_when_full() {
        let mut list: FixedList<String, 1> = FixedList::default();
        assert!(list.try_push_front("kept".to_string()).is_ok());
        let err = list.try_push_front("rejected".to_string()).unwrap_err();
        assert_eq!(err.capacity(), 1);
        assert_eq!(err.into_inner(), "rejected");
        assert_eq!(list.front().map(String::as_str), Ok("kept"));
    }

    #[test]
    fn first_push_uses_highest_slot() {
        let mut list: FixedList<u32, 4> = FixedList::default();
        list.push_front(1);
        assert_eq!(list.head, 3);
        list.push_front(2);
        assert_eq!(list.head, 2);
        assert_eq!(list.slots[2].next, 3);
    }

    #[test]
    fn popped_slot_is_reused_first() {
        let mut list: FixedList<u32, 4> = FixedList::default();
        list.push_front(1);
        list.push_front(2);
        let recycled = list.head;
        list.pop_front();
        list.push_front(3);
        assert_eq!(list.head, recycled);
    }

    #[test]
    fn clear_restores_allocation_order() {
        let mut fresh: FixedList<u32, 6> = FixedList::default();
        let mut used: FixedList<u32, 6> = FixedList::default();
        for v in 0..6 {
            used.push_front(v);
        }
        used.remove(&2);
        used.pop_front();
        used.clear();

        for v in 0..6 {
            fresh.push_front(v);
            used.push_front(v);
            assert_eq!(fresh.head, used.head);
        }
    }

    #[test]
    fn clear_with_refills_every_slot() {
        let mut list: FixedList<u32, 3> = FixedList::new(0);
        list.push_front(5);
        list.clear_with(9);
        assert!(list.slots.iter().all(|slot| slot.value == 9));
    }

    #[test]
    fn heap_list_zero_capacity_rejected() {
        let result = HeapList::with_capacity(0, 0u32);
        assert!(matches!(result, Err(ListError::ZeroCapacity)));
    }

    #[test]
    fn heap_list_from_config() {
        let list = HeapList::from_config(&ListConfig::default(), 0u8).unwrap();
        assert_eq!(list.capacity(), ListConfig::DEFAULT_CAPACITY);
        assert!(list.is_empty());
    }

    #[test]
    fn heap_list_behaves_like_fixed_list() {
        let mut fixed: FixedList<u32, 5> = FixedList::default();
        let mut heap = HeapList::with_capacity(5, 0u32).unwrap();
        for v in [4, 4, 1, 9, 4, 2] {
            fixed.push_front(v);
            heap.push_front(v);
        }
        fixed.remove(&4);
        heap.remove(&4);
        fixed.pop_front();
        heap.pop_front();
        assert_eq!(collect(&fixed), collect(&heap));
        assert_eq!(fixed.head, heap.head);
        assert_eq!(fixed.free_head, heap.free_head);
    }

    #[test]
    fn clone_is_independent() {
        let mut original: FixedList<u32, 3> = FixedList::default();
        original.push_front(1);
        let mut copy = original.clone();
        copy.push_front(2);
        assert_eq!(collect(&original), vec![1]);
        assert_eq!(collect(&copy), vec![2, 1]);
    }

    #[test]
    fn debug_lists_active_chain() {
        let mut list: FixedList<u32, 4> = FixedList::default();
        for v in 1..=3 {
            list.push_front(v);
        }
        assert_eq!(format!("{list:?}"), "[3, 2, 1]");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pops_return_pushes_reversed(
                values in proptest::collection::vec(any::<u16>(), 0..=16),
            ) {
                let mut list: FixedList<u16, 16> = FixedList::default();
                for &v in &values {
                    list.push_front(v);
                }
                let mut popped = Vec::new();
                while let Ok(&v) = list.front() {
                    popped.push(v);
                    list.pop_front();
                }
                let mut expected = values.clone();
                expected.reverse();
                prop_assert_eq!(popped, expected);
            }

            #[test]
            fn saturation_keeps_first_values(
                values in proptest::collection::vec(any::<u16>(), 8..32),
            ) {
                let mut list: FixedList<u16, 8> = FixedList::default();
                for &v in &values {
                    list.push_front(v);
                }
                let mut expected: Vec<u16> = values[..8].to_vec();
                expected.reverse();
                prop_assert_eq!(list.len(), 8);
                prop_assert_eq!(collect(&list), expected);
            }

            #[test]
            fn remove_matches_retain(
                values in proptest::collection::vec(0u8..4, 0..=12),
                target in 0u8..4,
            ) {
                let mut list: FixedList<u8, 12> = FixedList::default();
                for &v in &values {
                    list.push_front(v);
                }
                let mut expected: Vec<u8> = values.iter().rev().copied().collect();
                let before = expected.len();
                expected.retain(|&v| v != target);

                prop_assert_eq!(list.remove(&target), before - expected.len());
                prop_assert_eq!(collect(&list), expected);
                prop_assert_eq!(list.len() + list.free_len(), list.capacity());
            }
        }
    }
}

//! Benchmark workloads and backends for idxlist.
//!
//! - [`FrontQueue`]: the operation set shared by every benchmarked container
//! - [`Workload`]: a deterministic, seed-driven mix of front operations
//! - [`run_workload`]: replay a workload and fold the observed fronts into a checksum

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::{LinkedList, VecDeque};

use idxlist::{ArenaList, Storage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Front-only container operations, as exposed by the arena list.
///
/// Implemented for the arena list and for the std containers it is measured
/// against. Std containers are given the same capacity bound so saturation
/// behaves identically.
pub trait FrontQueue {
    /// Push at the front; silently ignored when at capacity.
    fn push(&mut self, value: u32);
    /// Drop the front element, if any.
    fn pop(&mut self);
    /// Current front element.
    fn peek(&self) -> Option<u32>;
    /// Remove every element equal to `value`.
    fn remove_all(&mut self, value: u32);
    /// Drop every element.
    fn reset(&mut self);
    /// Number of stored elements.
    fn size(&self) -> usize;
}

impl<S: Storage<u32>> FrontQueue for ArenaList<u32, S> {
    fn push(&mut self, value: u32) {
        self.push_front(value);
    }

    fn pop(&mut self) {
        self.pop_front();
    }

    fn peek(&self) -> Option<u32> {
        self.front().ok().copied()
    }

    fn remove_all(&mut self, value: u32) {
        self.remove(&value);
    }

    fn reset(&mut self) {
        self.clear();
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// `std::collections::LinkedList` with a capacity bound.
pub struct BoundedLinkedList {
    inner: LinkedList<u32>,
    capacity: usize,
}

impl BoundedLinkedList {
    /// Create an empty list that holds at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LinkedList::new(),
            capacity,
        }
    }
}

impl FrontQueue for BoundedLinkedList {
    fn push(&mut self, value: u32) {
        if self.inner.len() < self.capacity {
            self.inner.push_front(value);
        }
    }

    fn pop(&mut self) {
        self.inner.pop_front();
    }

    fn peek(&self) -> Option<u32> {
        self.inner.front().copied()
    }

    fn remove_all(&mut self, value: u32) {
        // LinkedList has no stable retain; rebuild from the survivors.
        let kept: LinkedList<u32> = std::mem::take(&mut self.inner)
            .into_iter()
            .filter(|&v| v != value)
            .collect();
        self.inner = kept;
    }

    fn reset(&mut self) {
        self.inner.clear();
    }

    fn size(&self) -> usize {
        self.inner.len()
    }
}

/// `std::collections::VecDeque` with a capacity bound, preallocated.
pub struct BoundedDeque {
    inner: VecDeque<u32>,
    capacity: usize,
}

impl BoundedDeque {
    /// Create an empty deque that holds at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
}

impl FrontQueue for BoundedDeque {
    fn push(&mut self, value: u32) {
        if self.inner.len() < self.capacity {
            self.inner.push_front(value);
        }
    }

    fn pop(&mut self) {
        self.inner.pop_front();
    }

    fn peek(&self) -> Option<u32> {
        self.inner.front().copied()
    }

    fn remove_all(&mut self, value: u32) {
        self.inner.retain(|&v| v != value);
    }

    fn reset(&mut self) {
        self.inner.clear();
    }

    fn size(&self) -> usize {
        self.inner.len()
    }
}

/// One step of a benchmark workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Push(u32),
    Pop,
    Remove(u32),
    Reset,
}

/// A reproducible sequence of [`Step`]s.
#[derive(Clone, Debug)]
pub struct Workload {
    steps: Vec<Step>,
}

impl Workload {
    /// Generate `len` steps from `seed`, with values in `0..value_domain`.
    ///
    /// Roughly half the steps push, a third pop, and the rest remove, with a
    /// rare reset. The same seed always yields the same steps.
    ///
    /// # Panics
    ///
    /// Panics if `value_domain` is zero.
    pub fn generate(seed: u64, len: usize, value_domain: u32) -> Self {
        assert!(value_domain > 0, "value_domain must be non-zero");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let steps = (0..len)
            .map(|_| match rng.random_range(0..100u32) {
                0..=49 => Step::Push(rng.random_range(0..value_domain)),
                50..=82 => Step::Pop,
                83..=98 => Step::Remove(rng.random_range(0..value_domain)),
                _ => Step::Reset,
            })
            .collect();
        Self { steps }
    }

    /// The generated steps.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// Replay `workload` on `queue`, folding every observed front into a checksum.
///
/// Backends with identical semantics produce identical checksums.
pub fn run_workload<Q: FrontQueue>(queue: &mut Q, workload: &Workload) -> u64 {
    let mut checksum = 0u64;
    for &step in workload.steps() {
        match step {
            Step::Push(v) => queue.push(v),
            Step::Pop => queue.pop(),
            Step::Remove(v) => queue.remove_all(v),
            Step::Reset => queue.reset(),
        }
        let front = queue.peek().map_or(0, |v| u64::from(v) + 1);
        checksum = checksum.wrapping_mul(31).wrapping_add(front);
    }
    checksum
}

/// Fill `queue` with `count` values cycling through `0..value_domain`.
///
/// # Panics
///
/// Panics if `value_domain` is zero.
pub fn fill<Q: FrontQueue>(queue: &mut Q, count: usize, value_domain: u32) {
    assert!(value_domain > 0, "value_domain must be non-zero");
    let domain = value_domain as usize;
    for i in 0..count {
        // `i % domain < value_domain`, so the conversion cannot fail.
        let value = u32::try_from(i % domain).unwrap_or(0);
        queue.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idxlist::{FixedList, HeapList};

    #[test]
    fn workload_is_reproducible() {
        let a = Workload::generate(7, 500, 16);
        let b = Workload::generate(7, 500, 16);
        assert_eq!(a.steps(), b.steps());
    }

    #[test]
    fn different_seeds_differ() {
        let a = Workload::generate(1, 200, 16);
        let b = Workload::generate(2, 200, 16);
        assert_ne!(a.steps(), b.steps());
    }

    #[test]
    fn backends_agree_on_checksum() {
        let workload = Workload::generate(42, 5_000, 8);
        let mut arena: FixedList<u32, 64> = FixedList::default();
        let mut heap = HeapList::with_capacity(64, 0u32).unwrap();
        let mut linked = BoundedLinkedList::new(64);
        let mut deque = BoundedDeque::new(64);

        let expected = run_workload(&mut deque, &workload);
        assert_eq!(run_workload(&mut arena, &workload), expected);
        assert_eq!(run_workload(&mut heap, &workload), expected);
        assert_eq!(run_workload(&mut linked, &workload), expected);
    }

    #[test]
    #[should_panic(expected = "value_domain must be non-zero")]
    fn fill_rejects_empty_value_domain() {
        let mut deque = BoundedDeque::new(4);
        fill(&mut deque, 3, 0);
    }

    #[test]
    #[should_panic(expected = "value_domain must be non-zero")]
    fn generate_rejects_empty_value_domain() {
        Workload::generate(1, 10, 0);
    }

    #[test]
    fn fill_cycles_through_value_domain() {
        let mut deque = BoundedDeque::new(8);
        fill(&mut deque, 5, 2);
        let mut seen = Vec::new();
        while let Some(v) = deque.peek() {
            seen.push(v);
            deque.pop();
        }
        assert_eq!(seen, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn fill_respects_capacity() {
        let mut arena: FixedList<u32, 4> = FixedList::default();
        let mut deque = BoundedDeque::new(4);
        fill(&mut arena, 10, 3);
        fill(&mut deque, 10, 3);
        assert_eq!(arena.size(), 4);
        assert_eq!(deque.size(), 4);
        assert_eq!(arena.peek(), deque.peek());
    }
}

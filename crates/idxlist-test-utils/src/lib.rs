//! Test utilities for idxlist development.
//!
//! Provides an [`Op`] vocabulary covering every mutating list call, proptest
//! strategies that generate operation sequences, and a [`ModelList`] built on
//! `VecDeque` that defines the expected behaviour of each operation. Drive
//! both with [`apply`] and compare with [`assert_matches_model`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use idxlist::{ArenaList, ListError, Storage};
use proptest::prelude::*;

/// Values are drawn from a small domain so `Remove` regularly hits
/// duplicates.
pub const VALUE_DOMAIN: u32 = 6;

/// One mutating call on a list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    PushFront(u32),
    TryPushFront(u32),
    PopFront,
    Remove(u32),
    Clear,
}

/// Strategy for a single [`Op`], weighted towards pushes so lists fill up.
pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..VALUE_DOMAIN).prop_map(Op::PushFront),
        2 => (0..VALUE_DOMAIN).prop_map(Op::TryPushFront),
        3 => Just(Op::PopFront),
        2 => (0..VALUE_DOMAIN).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

/// Strategy for a sequence of up to `max_len` operations.
pub fn arb_ops(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..=max_len)
}

/// Reference behaviour: a bounded deque holding the list front-to-back.
#[derive(Clone, Debug)]
pub struct ModelList {
    items: VecDeque<u32>,
    capacity: usize,
}

impl ModelList {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<u32> {
        self.items.front().copied()
    }

    /// Contents front to back.
    pub fn items(&self) -> Vec<u32> {
        self.items.iter().copied().collect()
    }

    /// Apply `op` and return what the list call should report.
    pub fn apply(&mut self, op: Op) -> Outcome {
        match op {
            Op::PushFront(v) | Op::TryPushFront(v) => {
                if self.items.len() == self.capacity {
                    return Outcome::Rejected(v);
                }
                self.items.push_front(v);
                Outcome::Done
            }
            Op::PopFront => {
                self.items.pop_front();
                Outcome::Done
            }
            Op::Remove(v) => {
                let before = self.items.len();
                self.items.retain(|&item| item != v);
                Outcome::Removed(before - self.items.len())
            }
            Op::Clear => {
                self.items.clear();
                Outcome::Done
            }
        }
    }
}

/// Observable result of one [`Op`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The push found the list full; carries the value that was dropped.
    Rejected(u32),
    /// Number of elements a `Remove` unlinked.
    Removed(usize),
}

/// Apply `op` to a real list and report the same [`Outcome`] shape as the model.
///
/// `PushFront` is the silent variant, so a rejection is detected by
/// comparing lengths around the call.
pub fn apply<S: Storage<u32>>(list: &mut ArenaList<u32, S>, op: Op) -> Outcome {
    match op {
        Op::PushFront(v) => {
            let before = list.len();
            list.push_front(v);
            if list.len() == before {
                Outcome::Rejected(v)
            } else {
                Outcome::Done
            }
        }
        Op::TryPushFront(v) => match list.try_push_front(v) {
            Ok(()) => Outcome::Done,
            Err(err) => Outcome::Rejected(err.into_inner()),
        },
        Op::PopFront => {
            list.pop_front();
            Outcome::Done
        }
        Op::Remove(v) => Outcome::Removed(list.remove(&v)),
        Op::Clear => {
            list.clear();
            Outcome::Done
        }
    }
}

/// Assert that `list` is observably identical to `model` and structurally sound.
pub fn assert_matches_model<S: Storage<u32>>(list: &ArenaList<u32, S>, model: &ModelList) {
    let contents: Vec<u32> = list.iter().copied().collect();
    assert_eq!(contents, model.items(), "contents diverged from model");
    assert_eq!(list.len(), model.len());
    assert_eq!(list.capacity(), model.capacity());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(list.is_full(), model.len() == model.capacity());
    assert_eq!(list.len() + list.free_len(), list.capacity());

    match model.front() {
        Some(v) => assert_eq!(list.front(), Ok(&v)),
        None => assert_eq!(
            list.front(),
            Err(ListError::OutOfRange {
                index: list.capacity(),
                capacity: list.capacity(),
            })
        ),
    }

    let report = list
        .audit()
        .unwrap_or_else(|err| panic!("audit failed: {err}"));
    assert_eq!(report.active, model.len());
    assert_eq!(report.free, model.capacity() - model.len());
}

/// `PushFront` ops for `0..count`, in ascending order.
pub fn ascending(count: u32) -> Vec<Op> {
    (0..count).map(Op::PushFront).collect()
}

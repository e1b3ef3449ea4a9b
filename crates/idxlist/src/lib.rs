//! Fixed-capacity, allocation-free linked list over an index-linked arena.
//!
//! An [`ArenaList`] stores its elements in a slot array sized once at
//! construction. Links are slot indices, and the slots not in use form a
//! second "free" chain threaded through the same array, so pushes and pops
//! recycle slots in O(1) without touching an allocator.
//!
//! # Architecture
//!
//! ```text
//! ArenaList<T, S: Storage<T>>
//! ├── S = [Slot<T>; N]        FixedList<T, N>  (inline, compile-time N)
//! ├── S = Box<[Slot<T>]>      HeapList<T>      (one allocation, runtime N)
//! ├── head ──► active chain   newest → oldest → sentinel
//! └── free_head ──► free chain  N-1 → ... → 0 → sentinel (after construction)
//! ```
//!
//! The sentinel is the index equal to the capacity. Every slot is on exactly
//! one of the two chains after every public call; [`ArenaList::audit`]
//! verifies this.
//!
//! # Example
//!
//! ```rust
//! use idxlist::FixedList;
//!
//! let mut list: FixedList<u32, 4> = FixedList::new(0);
//! for v in [3, 3, 3, 2] {
//!     list.push_front(v);
//! }
//! assert_eq!(list.remove(&3), 3);
//! assert_eq!(list.front(), Ok(&2));
//! list.pop_front();
//! assert!(list.front().is_err());
//! ```
//!
//! A zero-capacity inline list does not compile:
//!
//! ```compile_fail
//! let list: idxlist::FixedList<u32, 0> = idxlist::FixedList::new(0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod audit;
pub mod config;
pub mod error;
pub mod iter;
pub mod list;
pub mod slot;

// Public re-exports for the primary API surface.
pub use audit::{Chain, ChainReport};
pub use config::ListConfig;
pub use error::{AuditError, ListError, PushError};
pub use iter::Iter;
pub use list::{ArenaList, FixedList, HeapList};
pub use slot::{Slot, Storage};

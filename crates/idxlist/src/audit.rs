//! Structural verification of the two-chain partition.
//!
//! [`ArenaList::audit`] walks both chains and checks that together they visit
//! every slot exactly once, end at the sentinel, and agree with the cached
//! count. It allocates a scratch marker per slot and is never called by the
//! list operations themselves; tests call it.

use std::fmt;

use crate::error::AuditError;
use crate::list::ArenaList;
use crate::slot::{Slot, Storage};

/// Which of the two chains a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chain {
    /// Slots holding live elements, reached from the head.
    Active,
    /// Recyclable slots, reached from the free head.
    Free,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Free => write!(f, "free"),
        }
    }
}

/// Chain lengths observed by a successful audit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainReport {
    /// Slots reached from the head.
    pub active: usize,
    /// Slots reached from the free head.
    pub free: usize,
}

impl<T, S: Storage<T>> ArenaList<T, S> {
    /// Verify that the active and free chains partition the arena.
    ///
    /// Checks, in order: every link is in `[0, capacity]`, neither chain
    /// revisits a slot, no slot is on both chains, no slot is on neither, and
    /// the active chain length equals [`len`](Self::len).
    pub fn audit(&self) -> Result<ChainReport, AuditError> {
        let slots = self.slots.slots();
        let mut owner: Vec<Option<Chain>> = vec![None; slots.len()];

        let active = walk(slots, self.head, Chain::Active, &mut owner)?;
        let free = walk(slots, self.free_head, Chain::Free, &mut owner)?;

        if let Some(index) = owner.iter().position(Option::is_none) {
            return Err(AuditError::Unreachable { index });
        }
        if active != self.count {
            return Err(AuditError::CountMismatch {
                cached: self.count,
                walked: active,
            });
        }
        Ok(ChainReport { active, free })
    }
}

/// Follow `chain` from `head`, claiming each slot in `owner`.
///
/// Every step claims an unclaimed slot, so the walk ends within
/// `slots.len()` steps or reports the revisit.
fn walk<T>(
    slots: &[Slot<T>],
    head: usize,
    chain: Chain,
    owner: &mut [Option<Chain>],
) -> Result<usize, AuditError> {
    let capacity = slots.len();
    let mut current = head;
    let mut steps = 0;

    while current != capacity {
        let Some(slot) = slots.get(current) else {
            return Err(AuditError::LinkOutOfRange {
                chain,
                target: current,
                capacity,
            });
        };
        match owner[current] {
            Some(seen) if seen == chain => {
                return Err(AuditError::Cycle {
                    chain,
                    index: current,
                })
            }
            Some(_) => return Err(AuditError::Overlap { index: current }),
            None => owner[current] = Some(chain),
        }
        steps += 1;
        current = slot.next;
    }
    Ok(steps)
}

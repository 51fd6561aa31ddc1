//! # Tip Pool - Index-Addressable Set of Unapproved Messages
//!
//! ## Data Structures
//!
//! - `tips`: dense vector of members, O(1) access by position
//! - `positions`: O(1) lookup from id to its slot in `tips`
//!
//! Removal swaps the last member into the freed slot, so insert and remove
//! are O(1) and the dense vector copies out without rehashing.
//!
//! ## Invariants Enforced
//!
//! - `EMPTY_ID` is never a member (checked in `insert()`)
//! - `positions[tips[i]] == i` for every slot
//!
//! `TipPool` is **not** thread-safe. It is owned by `TipSelector`, which
//! guards it with a single exclusive lock.

use shared_types::MessageId;
use std::collections::HashMap;

/// Set of message ids that are currently unapproved leaves of the DAG.
#[derive(Debug, Default, Clone)]
pub struct TipPool {
    /// Members in slot order.
    tips: Vec<MessageId>,
    /// Slot of each member in `tips`.
    positions: HashMap<MessageId, usize>,
}

impl TipPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pool with room for `capacity` tips.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tips: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Number of tips in the pool.
    pub fn len(&self) -> usize {
        self.tips.len()
    }

    /// Returns true if the pool holds no tips.
    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Checks whether `id` is currently a tip.
    pub fn contains(&self, id: &MessageId) -> bool {
        self.positions.contains_key(id)
    }

    /// Adds `id` to the pool.
    ///
    /// Returns `false` if it was already present or is the genesis sentinel.
    pub fn insert(&mut self, id: MessageId) -> bool {
        if id.is_empty() || self.positions.contains_key(&id) {
            return false;
        }
        self.positions.insert(id, self.tips.len());
        self.tips.push(id);
        true
    }

    /// Removes `id` from the pool, returning whether it was present.
    pub fn remove(&mut self, id: &MessageId) -> bool {
        let Some(slot) = self.positions.remove(id) else {
            return false;
        };
        self.tips.swap_remove(slot);
        // The former last member now lives in `slot`.
        if let Some(moved) = self.tips.get(slot) {
            self.positions.insert(*moved, slot);
        }
        true
    }

    /// Independent copy of the current members.
    pub fn snapshot(&self) -> Vec<MessageId> {
        self.tips.clone()
    }
}

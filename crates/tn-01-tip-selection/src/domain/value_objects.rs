//! Value objects for the Tip Selection subsystem.

use serde::{Deserialize, Serialize};
use shared_types::{MessageId, EMPTY_ID};

/// The two parents chosen for a new message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TipPair {
    /// Parent placed in the trunk slot.
    pub trunk: MessageId,
    /// Parent placed in the branch slot.
    pub branch: MessageId,
}

impl TipPair {
    /// Creates a pair from explicit trunk and branch ids.
    pub const fn new(trunk: MessageId, branch: MessageId) -> Self {
        Self { trunk, branch }
    }

    /// Both slots point at genesis.
    pub const fn genesis() -> Self {
        Self::new(EMPTY_ID, EMPTY_ID)
    }

    /// Both slots point at the same tip.
    pub const fn single(tip: MessageId) -> Self {
        Self::new(tip, tip)
    }

    /// True when both slots reference genesis.
    pub fn is_genesis(&self) -> bool {
        self.trunk.is_empty() && self.branch.is_empty()
    }

    /// True when trunk and branch are different messages.
    pub fn is_distinct(&self) -> bool {
        self.trunk != self.branch
    }

    /// Splits the pair into `(trunk, branch)`.
    pub fn into_tuple(self) -> (MessageId, MessageId) {
        (self.trunk, self.branch)
    }
}

impl From<TipPair> for (MessageId, MessageId) {
    fn from(pair: TipPair) -> Self {
        pair.into_tuple()
    }
}

/// A change to the tip set, reported to listeners after the pool lock is
/// released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipEvent {
    /// A message became a tip.
    Added(MessageId),
    /// A tip was approved and left the pool.
    Removed(MessageId),
}

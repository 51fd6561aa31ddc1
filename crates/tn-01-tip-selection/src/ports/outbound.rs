//! Outbound (Driven) ports for the Tip Selection subsystem.
//!
//! These traits are the seams where selection policy and tip-set
//! observers plug into the engine.

use crate::domain::{TipEvent, TipPair};
use shared_types::MessageId;

/// Tip selection algorithm.
///
/// Implementations map a snapshot of the tip pool to a trunk/branch pair.
/// They must not retain the snapshot, and the only input besides it may be
/// a source of randomness.
///
/// Contract:
/// - empty snapshot: `TipPair::genesis()`
/// - one tip `x`: `TipPair::single(x)`
/// - two or more: two distinct members of the snapshot
pub trait TipSelectionStrategy: Send + Sync {
    /// Chooses a pair from `tips`.
    fn select(&self, tips: &[MessageId]) -> TipPair;
}

/// Observer of tip set changes.
///
/// Called outside the pool lock, after the `add_tip` that caused the
/// change has completed. Listeners must not assume events from different
/// threads arrive in linearization order.
pub trait TipEventListener: Send + Sync {
    /// A message became a tip.
    fn on_tip_added(&self, _id: MessageId) {}

    /// A tip was approved and retired.
    fn on_tip_removed(&self, _id: MessageId) {}

    /// Dispatches a single event to the matching callback.
    fn on_event(&self, event: TipEvent) {
        match event {
            TipEvent::Added(id) => self.on_tip_added(id),
            TipEvent::Removed(id) => self.on_tip_removed(id),
        }
    }
}

//! Metrics for tip pool operations
//!
//! Counters are updated by `TipSelector` and read through `snapshot()`.
//!
//! ## Usage
//!
//! ```ignore
//! let engine = TipSelector::new(UniformRandomStrategy);
//! engine.add_tip(&message);
//! let snapshot = engine.metrics();
//! assert_eq!(snapshot.tips_added, 1);
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for the tip selection engine.
#[derive(Debug, Default)]
pub struct TipSelectionMetrics {
    /// Messages that entered the pool
    pub tips_added: AtomicU64,
    /// `add_tip` calls for an id that was already a tip
    pub duplicate_tips: AtomicU64,
    /// Parents removed from the pool by approval
    pub tips_retired: AtomicU64,
    /// `get_tips` calls served
    pub selections: AtomicU64,
    /// `get_tips` calls answered with genesis
    pub genesis_selections: AtomicU64,
}

impl TipSelectionMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `add_tip` call
    ///
    /// # Arguments
    /// * `inserted` - Whether the message's own id entered the pool
    /// * `retired` - Number of parents removed (0 to 2)
    pub fn record_add(&self, inserted: bool, retired: usize) {
        if inserted {
            self.tips_added.fetch_add(1, Ordering::Relaxed);
        } else {
            self.duplicate_tips.fetch_add(1, Ordering::Relaxed);
        }
        self.tips_retired
            .fetch_add(retired as u64, Ordering::Relaxed);
    }

    /// Record one `get_tips` call
    pub fn record_selection(&self, genesis: bool) {
        self.selections.fetch_add(1, Ordering::Relaxed);
        if genesis {
            self.genesis_selections.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> TipSelectionMetricsSnapshot {
        TipSelectionMetricsSnapshot {
            tips_added: self.tips_added.load(Ordering::Relaxed),
            duplicate_tips: self.duplicate_tips.load(Ordering::Relaxed),
            tips_retired: self.tips_retired.load(Ordering::Relaxed),
            selections: self.selections.load(Ordering::Relaxed),
            genesis_selections: self.genesis_selections.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of `TipSelectionMetrics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TipSelectionMetricsSnapshot {
    pub tips_added: u64,
    pub duplicate_tips: u64,
    pub tips_retired: u64,
    pub selections: u64,
    pub genesis_selections: u64,
}

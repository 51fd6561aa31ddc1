//! Tip Selection Service
//!
//! `TipSelector` owns the tip pool and serializes every read and write of
//! it through one exclusive lock.
//!
//! # Atomicity
//! - `add_tip`: retire trunk, retire branch, insert own id, all under the
//!   lock. No caller can observe a pool with the parents gone but the new
//!   tip missing.
//! - `get_tips`: copies the pool under the lock, then runs the strategy on
//!   the copy with the lock released.
//!
//! Listener callbacks and metric updates happen after the lock is dropped.

use crate::adapters::ConfiguredStrategy;
use crate::domain::{TipEvent, TipPair, TipPool, TipSelectionConfig};
use crate::error::TipSelectionError;
use crate::metrics::{TipSelectionMetrics, TipSelectionMetricsSnapshot};
use crate::ports::{TipEventListener, TipSelectionApi, TipSelectionStrategy};
use parking_lot::Mutex;
use shared_types::{MessageId, MessageRef};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Tip Selection Engine
///
/// Implements the `TipSelectionApi` port over a `TipPool` and an injected
/// `TipSelectionStrategy`.
pub struct TipSelector<S: TipSelectionStrategy> {
    pool: Mutex<TipPool>,
    strategy: S,
    listeners: Vec<Arc<dyn TipEventListener>>,
    metrics: TipSelectionMetrics,
    pool_size_warning: usize,
    /// Set while the pool is at or above `pool_size_warning`.
    oversized: AtomicBool,
}

impl<S: TipSelectionStrategy> TipSelector<S> {
    /// Create an engine with default configuration.
    pub fn new(strategy: S) -> Self {
        let config = TipSelectionConfig::default();
        Self::build(strategy, &config)
    }

    /// Create an engine with a validated configuration.
    ///
    /// `config.strategy` and `config.seed` are ignored here because the
    /// strategy is passed in; see `TipSelector::from_config`.
    pub fn with_config(strategy: S, config: &TipSelectionConfig) -> Result<Self, TipSelectionError> {
        config.validate()?;
        Ok(Self::build(strategy, config))
    }

    fn build(strategy: S, config: &TipSelectionConfig) -> Self {
        Self {
            pool: Mutex::new(TipPool::with_capacity(config.initial_capacity)),
            strategy,
            listeners: Vec::new(),
            metrics: TipSelectionMetrics::new(),
            pool_size_warning: config.pool_size_warning,
            oversized: AtomicBool::new(false),
        }
    }

    /// Register a listener for tip added/removed events.
    pub fn with_listener(mut self, listener: Arc<dyn TipEventListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// The injected selection strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Checks whether `id` is currently a tip.
    pub fn is_tip(&self, id: &MessageId) -> bool {
        self.pool.lock().contains(id)
    }

    /// Copy of the current tip set, in unspecified order.
    pub fn tips(&self) -> Vec<MessageId> {
        self.pool.lock().snapshot()
    }

    /// Current counter values.
    pub fn metrics(&self) -> TipSelectionMetricsSnapshot {
        self.metrics.snapshot()
    }

    fn dispatch(&self, events: &[TipEvent]) {
        for listener in &self.listeners {
            for event in events {
                listener.on_event(*event);
            }
        }
    }

    /// Call with the pool lock held.
    fn pool_size_crossing(&self, size: usize) -> Option<PoolSizeCrossing> {
        let above = size >= self.pool_size_warning;
        if self.oversized.swap(above, Ordering::Relaxed) == above {
            None
        } else if above {
            Some(PoolSizeCrossing::Above)
        } else {
            Some(PoolSizeCrossing::Below)
        }
    }

    fn log_crossing(&self, crossing: PoolSizeCrossing, size: usize) {
        match crossing {
            PoolSizeCrossing::Above => warn!(
                tip_count = size,
                threshold = self.pool_size_warning,
                "tip pool above warning threshold, approval may have stalled"
            ),
            PoolSizeCrossing::Below => {
                debug!(tip_count = size, "tip pool back below warning threshold")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PoolSizeCrossing {
    Above,
    Below,
}

impl TipSelector<ConfiguredStrategy> {
    /// Create an engine whose strategy is chosen by `config.strategy`.
    pub fn from_config(config: &TipSelectionConfig) -> Result<Self, TipSelectionError> {
        config.validate()?;
        let strategy = ConfiguredStrategy::from_config(config)?;
        debug!(strategy = %strategy.kind(), "tip selector configured");
        Ok(Self::build(strategy, config))
    }
}

impl<S: TipSelectionStrategy + Default> Default for TipSelector<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: TipSelectionStrategy> TipSelectionApi for TipSelector<S> {
    fn add_tip(&self, message: &MessageRef) {
        if message.id.is_empty() {
            warn!("ignoring add_tip for the genesis id");
            return;
        }

        let track_events = !self.listeners.is_empty();
        let mut events = Vec::new();

        let (inserted, retired, size, crossing) = {
            let mut pool = self.pool.lock();
            let mut retired = 0;
            // A repeated parent finds nothing to remove the second time.
            for parent in message.parents() {
                if pool.remove(&parent) {
                    retired += 1;
                    if track_events {
                        events.push(TipEvent::Removed(parent));
                    }
                }
            }
            let inserted = pool.insert(message.id);
            if inserted && track_events {
                events.push(TipEvent::Added(message.id));
            }
            let size = pool.len();
            (inserted, retired, size, self.pool_size_crossing(size))
        };

        if inserted {
            trace!(
                message = %message.id,
                trunk = %message.trunk,
                branch = %message.branch,
                retired,
                tip_count = size,
                "tip added"
            );
        } else {
            debug!(message = %message.id, retired, "message already a tip");
        }

        self.metrics.record_add(inserted, retired);
        if let Some(crossing) = crossing {
            self.log_crossing(crossing, size);
        }
        self.dispatch(&events);
    }

    fn get_tips(&self) -> TipPair {
        let snapshot = self.pool.lock().snapshot();
        let pair = self.strategy.select(&snapshot);
        self.metrics.record_selection(pair.is_genesis());
        trace!(
            trunk = %pair.trunk,
            branch = %pair.branch,
            tip_count = snapshot.len(),
            "tips selected"
        );
        pair
    }

    fn get_tip_count(&self) -> usize {
        self.pool.lock().len()
    }
}

//! Tip selection configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use tn_01_tip_selection::domain::{StrategyKind, TipSelectionConfig};
//!
//! let config = TipSelectionConfig::default()
//!     .with_strategy(StrategyKind::Seeded)
//!     .with_seed(42);
//! config.validate()?;
//! ```

use crate::error::TipSelectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which selection strategy the engine is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Uniform random over the thread-local RNG.
    #[default]
    Uniform,
    /// Uniform random over an RNG seeded from `TipSelectionConfig::seed`.
    Seeded,
}

impl FromStr for StrategyKind {
    type Err = TipSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "seeded" => Ok(Self::Seeded),
            other => Err(TipSelectionError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => f.write_str("uniform"),
            Self::Seeded => f.write_str("seeded"),
        }
    }
}

/// Tip selection engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipSelectionConfig {
    /// Capacity reserved for the tip pool up front.
    pub initial_capacity: usize,
    /// Selection strategy.
    pub strategy: StrategyKind,
    /// RNG seed, required for `StrategyKind::Seeded`.
    pub seed: Option<u64>,
    /// Pool size at which a warning is logged.
    ///
    /// The engine never evicts; a pool this large usually means approval
    /// has stalled upstream.
    pub pool_size_warning: usize,
}

impl Default for TipSelectionConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1_024,
            strategy: StrategyKind::Uniform,
            seed: None,
            pool_size_warning: 10_000,
        }
    }
}

impl TipSelectionConfig {
    /// Validate configuration before building an engine.
    pub fn validate(&self) -> Result<(), TipSelectionError> {
        if self.pool_size_warning == 0 {
            return Err(TipSelectionError::InvalidConfig(
                "pool_size_warning cannot be 0".to_string(),
            ));
        }

        if self.strategy == StrategyKind::Seeded && self.seed.is_none() {
            return Err(TipSelectionError::MissingSeed);
        }

        Ok(())
    }

    /// Builder-style method to set the strategy
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder-style method to set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder-style method to set the initial pool capacity
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builder-style method to set the pool size warning threshold
    pub fn with_pool_size_warning(mut self, threshold: usize) -> Self {
        self.pool_size_warning = threshold;
        self
    }
}

//! Tip selection strategies.
//!
//! Both strategies run the same uniform rule (`domain::select_uniform`);
//! they differ only in where randomness comes from.

use crate::domain::{select_uniform, StrategyKind, TipPair, TipSelectionConfig};
use crate::error::TipSelectionError;
use crate::ports::TipSelectionStrategy;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::MessageId;

/// Uniform random selection using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandomStrategy;

impl TipSelectionStrategy for UniformRandomStrategy {
    fn select(&self, tips: &[MessageId]) -> TipPair {
        select_uniform(tips, &mut rand::thread_rng())
    }
}

/// Uniform random selection with a reproducible RNG stream.
///
/// Concurrent callers share one stream, so the sequence is only
/// reproducible when selections happen in a fixed order.
#[derive(Debug)]
pub struct SeededRandomStrategy {
    rng: Mutex<StdRng>,
}

impl SeededRandomStrategy {
    /// Creates a strategy whose RNG starts from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TipSelectionStrategy for SeededRandomStrategy {
    fn select(&self, tips: &[MessageId]) -> TipPair {
        select_uniform(tips, &mut *self.rng.lock())
    }
}

/// Strategy chosen at runtime from `TipSelectionConfig`.
#[derive(Debug)]
pub enum ConfiguredStrategy {
    Uniform(UniformRandomStrategy),
    Seeded(SeededRandomStrategy),
}

impl ConfiguredStrategy {
    /// Builds the strategy named by `config.strategy`.
    pub fn from_config(config: &TipSelectionConfig) -> Result<Self, TipSelectionError> {
        match config.strategy {
            StrategyKind::Uniform => Ok(Self::Uniform(UniformRandomStrategy)),
            StrategyKind::Seeded => {
                let seed = config.seed.ok_or(TipSelectionError::MissingSeed)?;
                Ok(Self::Seeded(SeededRandomStrategy::new(seed)))
            }
        }
    }

    /// Kind of the wrapped strategy.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Uniform(_) => StrategyKind::Uniform,
            Self::Seeded(_) => StrategyKind::Seeded,
        }
    }
}

impl TipSelectionStrategy for ConfiguredStrategy {
    fn select(&self, tips: &[MessageId]) -> TipPair {
        match self {
            Self::Uniform(strategy) => strategy.select(tips),
            Self::Seeded(strategy) => strategy.select(tips),
        }
    }
}

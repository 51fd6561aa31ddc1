//! # Domain Layer - Tip Selection Subsystem
//!
//! Pure logic with no locking and no I/O.
//!
//! ## Components
//!
//! - `pool`: TipPool, the index-addressable set of unapproved messages
//! - `selection`: uniform trunk/branch selection over a pool snapshot
//! - `value_objects`: TipPair, TipEvent
//! - `config`: TipSelectionConfig, StrategyKind

pub mod config;
pub mod pool;
pub mod selection;
pub mod value_objects;

pub use config::*;
pub use pool::*;
pub use selection::*;
pub use value_objects::*;

//! # Tip Selection Subsystem
//!
//! **Subsystem ID:** 1
//!
//! ## Purpose
//!
//! Tracks the unapproved leaves ("tips") of the message DAG and chooses the
//! trunk and branch a new message attaches to. Called concurrently from
//! gossip ingestion and from local message issuance.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | An id is a tip iff inserted and not yet referenced as a parent | `service.rs` - `add_tip()` |
//! | The genesis id is never a tip | `domain/pool.rs` - `insert()` |
//! | Trunk != branch whenever two or more tips exist | `domain/selection.rs` - `select_uniform()` |
//! | `add_tip` and `get_tips` are linearizable | `service.rs` - single `Mutex<TipPool>` |
//!
//! ## Tip Lifecycle
//!
//! ```text
//! [TIP] ──referenced as trunk/branch by add_tip──→ [RETIRED]
//! ```
//!
//! Retired ids are dropped, not tombstoned.
//!
//! | Pool size | `get_tips()` |
//! |-----------|--------------|
//! | 0 | `(EMPTY_ID, EMPTY_ID)` |
//! | 1 | `(x, x)` |
//! | ≥ 2 | two distinct tips, uniformly at random |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      OUTER LAYER                                │
//! │  adapters/ - strategies (uniform, seeded), event listeners      │
//! │  service.rs - TipSelector (lock + pool + strategy)              │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      MIDDLE LAYER                               │
//! │  ports/inbound.rs  - TipSelectionApi trait                      │
//! │  ports/outbound.rs - TipSelectionStrategy, TipEventListener     │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      INNER LAYER                                │
//! │  domain/pool.rs          - TipPool (index-addressable set)      │
//! │  domain/selection.rs     - select_uniform                       │
//! │  domain/value_objects.rs - TipPair, TipEvent                    │
//! │  domain/config.rs        - TipSelectionConfig, StrategyKind     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tn_01_tip_selection::{TipSelectionApi, TipSelector, UniformRandomStrategy};
//!
//! let engine = TipSelector::new(UniformRandomStrategy);
//! let parents = engine.get_tips();
//! let message = MessageRef::new(new_id, parents.trunk, parents.branch);
//! engine.add_tip(&message);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use error::TipSelectionError;
pub use metrics::{TipSelectionMetrics, TipSelectionMetricsSnapshot};
pub use ports::*;
pub use service::TipSelector;

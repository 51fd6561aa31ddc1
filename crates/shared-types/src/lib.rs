//! # Shared Types Crate
//!
//! Message identity types shared across the Tangle node subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `MessageId` and the genesis sentinel
//!   `EMPTY_ID` are defined here and nowhere else.
//! - **Sentinel, not Option**: a missing parent is the `EMPTY_ID` value of
//!   the same identifier type, so parent slots are always populated.
//! - **Identity only**: `MessageRef` carries ids, never payload bytes.

pub mod entities;

pub use entities::*;

//! Adapters for the Tip Selection subsystem.
//!
//! Concrete implementations of the outbound ports:
//! - `strategy`: uniform and seeded random tip selection
//! - `listeners`: recording and logging tip event listeners

pub mod listeners;
pub mod strategy;

pub use listeners::*;
pub use strategy::*;

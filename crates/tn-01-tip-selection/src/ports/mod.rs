//! Ports layer for the Tip Selection subsystem.
//!
//! - `inbound`: TipSelectionApi (driving port)
//! - `outbound`: TipSelectionStrategy, TipEventListener (driven ports)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;

//! Error types for the Tip Selection subsystem.
//!
//! Tip pool operations are total and never fail. Errors only arise while
//! building a `TipSelector` from configuration.

use thiserror::Error;

/// Errors that can occur while configuring tip selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TipSelectionError {
    #[error("Invalid tip selection config: {0}")]
    InvalidConfig(String),

    #[error("Seeded strategy requested without a seed")]
    MissingSeed,

    #[error("Unknown tip selection strategy: {0}")]
    UnknownStrategy(String),
}

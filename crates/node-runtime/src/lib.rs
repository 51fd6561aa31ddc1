//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! - `config`: `NodeConfig` loaded from `TN_*` environment variables
//! - `issuer`: local message issuer driving the tip selection engine
//! - `runtime`: `NodeRuntime`, task wiring and shutdown

pub mod config;
pub mod issuer;
pub mod runtime;

pub use config::{ConfigError, IssuerConfig, NodeConfig};
pub use issuer::MessageIssuer;
pub use runtime::{NodeRuntime, NodeTipSelector, RunSummary};

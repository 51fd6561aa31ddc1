//! # Tangle Node Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # criterion benchmarks for the tip selection engine
//! └── src/integration/  # cross-crate scenarios
//!     ├── tip_lifecycle.rs        # canonical tip sequences via the public API
//!     └── concurrent_ingestion.rs # gossip + local issuance under contention
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tn-tests
//!
//! # Benchmarks
//! cargo bench -p tn-tests
//! ```

//! # Tangle Node Runtime
//!
//! Entry point for the Tangle node.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize logging (`RUST_LOG` overrides `TN_LOG_LEVEL`)
//! 3. Build the tip selection engine and spawn issuers
//! 4. Run until the issuers finish or Ctrl+C

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env().context("failed to load configuration")?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let runtime = NodeRuntime::new(config)?;

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::select! {
        summary = runtime.run() => {
            let summary = summary?;
            info!(
                issued = summary.issued,
                tip_count = summary.tip_count,
                "all issuers finished"
            );
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl+C")?;
            info!("Initiating graceful shutdown...");
            runtime.shutdown();
        }
    }

    Ok(())
}

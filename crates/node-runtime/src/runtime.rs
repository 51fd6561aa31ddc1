//! # Node Runtime
//!
//! Owns the tip selection engine and the tasks that drive it.
//!
//! ## Startup Sequence
//!
//! 1. Build the engine from `NodeConfig::tip_selection`
//! 2. Spawn one `MessageIssuer` task per configured issuer
//! 3. Spawn the tip pool reporter
//! 4. Wait for the issuers to finish or for `shutdown()`

use std::sync::Arc;

use anyhow::{Context, Result};
use tn_01_tip_selection::{
    ConfiguredStrategy, TipSelectionApi, TipSelectionMetricsSnapshot, TipSelector,
    TracingListener,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::NodeConfig;
use crate::issuer::MessageIssuer;

/// Engine type used by the node.
pub type NodeTipSelector = TipSelector<ConfiguredStrategy>;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Messages created by all issuers together.
    pub issued: u64,
    /// Tips left when the run ended.
    pub tip_count: usize,
    /// Engine counters at the end of the run.
    pub metrics: TipSelectionMetricsSnapshot,
}

/// The main node runtime.
pub struct NodeRuntime {
    config: NodeConfig,
    engine: Arc<NodeTipSelector>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver.
    shutdown_rx: watch::Receiver<bool>,
}

impl NodeRuntime {
    /// Create a new node runtime with configuration.
    pub fn new(config: NodeConfig) -> Result<Self> {
        config.validate().context("invalid node configuration")?;
        let engine = TipSelector::from_config(&config.tip_selection)
            .context("failed to build tip selector")?
            .with_listener(Arc::new(TracingListener));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            engine: Arc::new(engine),
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Shared handle to the tip selection engine.
    pub fn engine(&self) -> Arc<NodeTipSelector> {
        Arc::clone(&self.engine)
    }

    /// Run issuers to completion, or until `shutdown()` is called.
    pub async fn run(&self) -> Result<RunSummary> {
        info!(
            issuers = self.config.issuer.issuers,
            strategy = %self.config.tip_selection.strategy,
            "starting Tangle node runtime"
        );

        let issuers = self.spawn_issuers();
        let reporter = self.spawn_reporter();

        let mut issued = 0;
        for handle in issuers {
            issued += handle.await.context("issuer task failed")?;
        }

        self.shutdown();
        reporter.await.context("reporter task failed")?;

        let summary = RunSummary {
            issued,
            tip_count: self.engine.get_tip_count(),
            metrics: self.engine.metrics(),
        };
        info!(
            issued = summary.issued,
            tip_count = summary.tip_count,
            "node runtime stopped"
        );
        Ok(summary)
    }

    /// Signal every task to stop.
    pub fn shutdown(&self) {
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("Failed to send shutdown signal: {}", e);
        }
    }

    fn spawn_issuers(&self) -> Vec<JoinHandle<u64>> {
        let limit = self.config.issuer.messages_per_issuer;
        let interval = self.config.issuer.issue_interval();

        (0..self.config.issuer.issuers)
            .map(|n| {
                let issuer = MessageIssuer::new(n as u32, self.engine());
                tokio::spawn(issuer.run(limit, interval, self.shutdown_rx.clone()))
            })
            .collect()
    }

    fn spawn_reporter(&self) -> JoinHandle<()> {
        let engine = self.engine();
        let mut shutdown = self.shutdown_rx.clone();
        let mut ticker = tokio::time::interval(self.config.report_interval());

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let metrics = engine.metrics();
                        info!(
                            tip_count = engine.get_tip_count(),
                            tips_added = metrics.tips_added,
                            tips_retired = metrics.tips_retired,
                            selections = metrics.selections,
                            "tip pool status"
                        );
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }
        })
    }
}

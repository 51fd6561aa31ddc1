//! # Local Message Issuer
//!
//! Drives the tip selection engine the way local message construction
//! does: select parents, derive the new message id, register it as a tip.
//!
//! Message encoding and signing are not part of this node; the id is a
//! SHA-256 digest over the issuer, its sequence number and both parents.

use std::sync::Arc;
use std::time::Duration;

use shared_types::{MessageId, MessageRef};
use tn_01_tip_selection::TipSelectionApi;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Issues messages on behalf of one local identity.
pub struct MessageIssuer<E: TipSelectionApi> {
    issuer_id: u32,
    sequence: u64,
    engine: Arc<E>,
}

impl<E: TipSelectionApi> MessageIssuer<E> {
    pub fn new(issuer_id: u32, engine: Arc<E>) -> Self {
        Self {
            issuer_id,
            sequence: 0,
            engine,
        }
    }

    /// Number of messages issued so far.
    pub fn issued(&self) -> u64 {
        self.sequence
    }

    /// Creates one message on top of the current tips and attaches it.
    pub fn issue(&mut self) -> MessageRef {
        let parents = self.engine.get_tips();
        let id = MessageId::digest(&[
            &self.issuer_id.to_le_bytes()[..],
            &self.sequence.to_le_bytes()[..],
            &parents.trunk.as_bytes()[..],
            &parents.branch.as_bytes()[..],
        ]);
        let message = MessageRef::new(id, parents.trunk, parents.branch);
        self.engine.add_tip(&message);
        self.sequence += 1;

        trace!(
            issuer = self.issuer_id,
            sequence = self.sequence,
            message = %id,
            "message issued"
        );
        message
    }

    /// Issues messages every `interval` until `limit` is reached or
    /// `shutdown` flips to true. Returns the number issued.
    pub async fn run(
        mut self,
        limit: Option<u64>,
        interval: Duration,
        mut shutdown: watch::Receiver<bool>,
    ) -> u64 {
        let mut ticker = tokio::time::interval(interval);
        loop {
            if *shutdown.borrow() || limit.is_some_and(|max| self.sequence >= max) {
                break;
            }
            tokio::select! {
                _ = ticker.tick() => {
                    self.issue();
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }
        debug!(issuer = self.issuer_id, issued = self.sequence, "issuer stopped");
        self.sequence
    }
}

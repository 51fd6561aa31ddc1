//! # Inbound Port - TipSelectionApi
//!
//! Primary driving port exposing the tip selection engine.
//!
//! ## Callers
//!
//! | Method | Caller |
//! |--------|--------|
//! | `add_tip` | Gossip ingestion workers, local message issuer |
//! | `get_tips` | Local message issuer, right before building a message |
//! | `get_tip_count` | Monitoring and telemetry |

use crate::domain::TipPair;
use shared_types::MessageRef;

/// Primary API for the Tip Selection subsystem.
///
/// All methods take `&self`; implementations synchronize internally and may
/// be shared across threads behind an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use tn_01_tip_selection::ports::TipSelectionApi;
///
/// fn issue(engine: &impl TipSelectionApi, id: MessageId) {
///     let tips = engine.get_tips();
///     engine.add_tip(&MessageRef::new(id, tips.trunk, tips.branch));
/// }
/// ```
pub trait TipSelectionApi: Send + Sync {
    /// Registers a newly accepted message.
    ///
    /// Retires `trunk` and `branch` from the tip set if present, then adds
    /// the message's own id, as a single atomic step. Parents that are not
    /// tips and ids that are already tips are no-ops.
    ///
    /// The message must have passed validation before this call.
    fn add_tip(&self, message: &MessageRef);

    /// Selects the trunk and branch for a new message.
    ///
    /// Returns `(EMPTY_ID, EMPTY_ID)` when there are no tips, `(x, x)` for a
    /// single tip, and two distinct tips otherwise.
    fn get_tips(&self) -> TipPair;

    /// Current number of tips.
    fn get_tip_count(&self) -> usize;
}

//! Tip event listeners.

use crate::domain::TipEvent;
use crate::ports::TipEventListener;
use parking_lot::Mutex;
use shared_types::MessageId;
use tracing::trace;

/// Keeps every event in memory, in dispatch order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Mutex<Vec<TipEvent>>,
}

impl RecordingListener {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far.
    pub fn events(&self) -> Vec<TipEvent> {
        self.events.lock().clone()
    }

    /// Drains and returns the recorded events.
    pub fn take(&self) -> Vec<TipEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl TipEventListener for RecordingListener {
    fn on_event(&self, event: TipEvent) {
        self.events.lock().push(event);
    }
}

/// Logs every tip event at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl TipEventListener for TracingListener {
    fn on_tip_added(&self, id: MessageId) {
        trace!(tip = %id, "tip added");
    }

    fn on_tip_removed(&self, id: MessageId) {
        trace!(tip = %id, "tip removed");
    }
}

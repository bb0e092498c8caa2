//! Status sink port.
//!
//! The creation flow reports progress through a [`StatusSink`]. Sinks are
//! called synchronously, in order, from the task running the flow.

use crate::domain::status::StatusEvent;

/// Receiver for creation progress events.
pub trait StatusSink: Send + Sync {
    /// Handle one event. Must not block for long.
    fn emit(&self, event: StatusEvent);
}

impl<F> StatusSink for F
where
    F: Fn(StatusEvent) + Send + Sync,
{
    fn emit(&self, event: StatusEvent) {
        self(event);
    }
}

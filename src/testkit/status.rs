//! Recording status sink.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::status::{StatusEvent, StatusKind};
use crate::port::outbound::status::StatusSink;

/// Thread-safe event collector for status assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<StatusEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StatusEvent> {
        self.events.lock().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.title.clone()).collect()
    }

    pub fn kinds(&self) -> Vec<StatusKind> {
        self.events.lock().iter().map(|e| e.kind).collect()
    }

    /// Number of events carrying `title`.
    pub fn count(&self, title: &str) -> usize {
        self.events.lock().iter().filter(|e| e.title == title).count()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl StatusSink for RecordingSink {
    fn emit(&self, event: StatusEvent) {
        self.events.lock().push(event);
    }
}

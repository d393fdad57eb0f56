//! Recording Event Sink
//!
//! Keeps every clone event in memory, for tests and for callers that want
//! to inspect diagnostics after the fact.

use std::cell::RefCell;

use crate::domain::ports::{CloneEvent, CloneEventSink};

#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: RefCell<Vec<CloneEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first
    pub fn events(&self) -> Vec<CloneEvent> {
        self.events.borrow().clone()
    }

    /// Kinds of every skipped unsupported node
    pub fn skipped_kinds(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                CloneEvent::UnsupportedNodeSkipped { kind, .. } => Some(kind.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl CloneEventSink for RecordingEventSink {
    fn on_event(&self, event: CloneEvent) {
        self.events.borrow_mut().push(event);
    }
}

//! Clone Event Port
//!
//! Provides an observable interface for clone operations.
//! Enables NDJSON diagnostics, tests, and debugging.

use crate::domain::services::CloneSummary;
use crate::domain::value_objects::GroupKey;

/// Event emitted during a clone
#[derive(Debug, Clone, PartialEq)]
pub enum CloneEvent {
    /// Clone started
    Started { title: String },

    /// A source node of an unrecognised kind was left out of the proxy tree
    UnsupportedNodeSkipped {
        kind: String,
        /// Titles of the enclosing submenus, root first
        path: Vec<String>,
        /// Position among its siblings in the source
        index: usize,
    },

    /// One proxy-side exclusive group was created
    GroupRebuilt { key: GroupKey, members: usize },

    /// Clone committed to the target
    Completed { summary: CloneSummary },

    /// Clone aborted; the target was not modified
    Failed { error: String },
}

/// Trait for receiving clone events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - RecordingEventSink: in-memory capture
/// - NoopEventSink: Silent operation
pub trait CloneEventSink {
    /// Handle a clone event
    fn on_event(&self, event: CloneEvent);

    /// Check if this sink wants per-node events (skips, groups)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CloneEventSink for NoopEventSink {
    fn on_event(&self, _event: CloneEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

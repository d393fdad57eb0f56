//! Event Sink Implementations
//!
//! Provides concrete implementations of CloneEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - RecordingEventSink: in-memory capture

mod json;
mod recording;

pub use json::JsonEventSink;
pub use recording::RecordingEventSink;

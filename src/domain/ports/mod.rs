//! Domain Ports (Interfaces)
//!
//! Traits at the boundary of the domain layer. Infrastructure provides the
//! concrete implementations.

pub mod clone_events;

pub use clone_events::{CloneEvent, CloneEventSink, NoopEventSink};

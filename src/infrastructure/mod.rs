//! Infrastructure Layer
//!
//! Concrete implementations of domain ports, and everything that touches
//! the file system.
//!
//! ## Structure
//!
//! - `document` - menu description files (TOML/JSON) to source trees
//! - `events/` - clone event sinks (NDJSON, in-memory)

pub mod document;
pub mod events;

// Re-export for convenience
pub use document::{DocumentFormat, DocumentWarning, ItemSpec, MenuDocument};
pub use events::{JsonEventSink, RecordingEventSink};

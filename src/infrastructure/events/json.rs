//! JSON Event Sink
//!
//! Outputs clone events as NDJSON for CI/automation consumption.

use crate::domain::ports::{CloneEvent, CloneEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    /// Emit a non-clone diagnostic, such as an unknown document key
    pub fn warning(&self, message: &str) {
        self.write_event(serde_json::json!({
            "event": "warning",
            "command": self.command,
            "message": message,
        }));
    }

    /// Write one raw event line
    pub fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl CloneEventSink for JsonEventSink {
    fn on_event(&self, event: CloneEvent) {
        let json = match event {
            CloneEvent::Started { title } => {
                serde_json::json!({
                    "event": "start",
                    "command": self.command,
                    "menu": title,
                })
            }

            CloneEvent::UnsupportedNodeSkipped { kind, path, index } => {
                serde_json::json!({
                    "event": "node_skipped",
                    "command": self.command,
                    "kind": kind,
                    "path": path,
                    "index": index,
                })
            }

            CloneEvent::GroupRebuilt { key, members } => {
                serde_json::json!({
                    "event": "group_rebuilt",
                    "command": self.command,
                    "key": key,
                    "members": members,
                })
            }

            CloneEvent::Completed { summary } => {
                serde_json::json!({
                    "event": "complete",
                    "command": self.command,
                    "status": "success",
                    "summary": summary,
                })
            }

            CloneEvent::Failed { error } => {
                serde_json::json!({
                    "event": "complete",
                    "command": self.command,
                    "status": "error",
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }
}

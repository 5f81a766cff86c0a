//! JSON Event Sink
//!
//! Outputs lifecycle events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink};
use crate::domain::value_objects::ExitOutcome;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn outcome_json(outcome: ExitOutcome) -> serde_json::Value {
    match outcome {
        ExitOutcome::Exited(code) => serde_json::json!({ "exit_code": code }),
        ExitOutcome::Signaled(signal) => serde_json::json!({ "signal": signal }),
    }
}

pub(crate) fn event_to_json(event: LifecycleEvent) -> serde_json::Value {
    match event {
        LifecycleEvent::TargetStarted { target } => serde_json::json!({
            "event": "target_start",
            "target": target,
        }),

        LifecycleEvent::CommandStarted { target, command } => serde_json::json!({
            "event": "command_start",
            "target": target,
            "command": command,
        }),

        LifecycleEvent::CommandPlanned { target, command } => serde_json::json!({
            "event": "command_planned",
            "target": target,
            "command": command,
        }),

        LifecycleEvent::CommandFinished {
            target,
            command,
            outcome,
        } => serde_json::json!({
            "event": "command_finished",
            "target": target,
            "command": command,
            "success": outcome.success(),
            "outcome": outcome_json(outcome),
        }),

        LifecycleEvent::RemovingPath { path } => serde_json::json!({
            "event": "removing",
            "target": "uninstall",
            "path": path.display().to_string(),
        }),

        LifecycleEvent::RemoveFailed { path, outcome } => serde_json::json!({
            "event": "remove_failed",
            "target": "uninstall",
            "path": path.display().to_string(),
            "outcome": outcome_json(outcome),
        }),

        LifecycleEvent::NothingToUninstall => serde_json::json!({
            "event": "nothing_to_uninstall",
            "target": "uninstall",
        }),

        LifecycleEvent::ReceiptWritten {
            path,
            status,
            path_count,
        } => serde_json::json!({
            "event": "receipt_written",
            "target": "install",
            "path": path.display().to_string(),
            "status": status,
            "path_count": path_count,
        }),

        LifecycleEvent::TargetFinished { target, success } => serde_json::json!({
            "event": "target_finished",
            "target": target,
            "success": success,
        }),
    }
}

impl LifecycleEventSink for JsonEventSink {
    fn on_event(&self, event: LifecycleEvent) {
        self.write_event(event_to_json(event));
    }
}

//! Console Event Sink
//!
//! Plain-text output. Stays as quiet as the classic Makefile: the only lines
//! on stdout are the paths uninstall removes and, under `--dry-run`, the
//! commands that would run. Everything else goes to the tracing log.

use std::io::{self, Write};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl LifecycleEventSink for ConsoleEventSink {
    fn on_event(&self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::RemovingPath { path } => self.line(&path.display().to_string()),
            LifecycleEvent::CommandPlanned { command, .. } => self.line(&command),
            LifecycleEvent::TargetStarted { target } => debug!(%target, "target started"),
            LifecycleEvent::CommandStarted { target, command } => {
                info!(%target, "{}", command)
            }
            LifecycleEvent::CommandFinished {
                target, outcome, ..
            } => debug!(%target, %outcome, "command finished"),
            LifecycleEvent::RemoveFailed { path, outcome } => {
                info!(path = %path.display(), %outcome, "removal failed")
            }
            LifecycleEvent::NothingToUninstall => debug!("no install record, nothing to uninstall"),
            LifecycleEvent::ReceiptWritten {
                path,
                status,
                path_count,
            } => info!(
                path = %path.display(),
                %status,
                path_count,
                "install receipt written"
            ),
            LifecycleEvent::TargetFinished { target, success } => {
                debug!(%target, success, "target finished")
            }
        }
    }
}

//! Lifecycle Event Port
//!
//! Provides an observable interface for target execution.
//! Enables the uninstall path echo, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::ReceiptStatus;
use crate::domain::value_objects::{ExitOutcome, Target};

/// Event emitted while running targets
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    /// A target started
    TargetStarted { target: Target },

    /// An external command is about to run
    CommandStarted { target: Target, command: String },

    /// Dry run: the command that would have run
    CommandPlanned { target: Target, command: String },

    /// An external command exited
    CommandFinished {
        target: Target,
        command: String,
        outcome: ExitOutcome,
    },

    /// A recorded path is about to be removed (the per-path echo)
    RemovingPath { path: PathBuf },

    /// Removal of a recorded path failed
    RemoveFailed { path: PathBuf, outcome: ExitOutcome },

    /// Uninstall found no install record
    NothingToUninstall,

    /// Install receipt was written
    ReceiptWritten {
        path: PathBuf,
        status: ReceiptStatus,
        path_count: usize,
    },

    /// A target finished
    TargetFinished { target: Target, success: bool },
}

/// Trait for receiving lifecycle events
///
/// Implementations:
/// - `ConsoleEventSink`: plain text on stdout
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: Silent operation
pub trait LifecycleEventSink {
    /// Handle a lifecycle event
    fn on_event(&self, event: LifecycleEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl LifecycleEventSink for NoopEventSink {
    fn on_event(&self, _event: LifecycleEvent) {}
}

impl<T: LifecycleEventSink + ?Sized> LifecycleEventSink for Box<T> {
    fn on_event(&self, event: LifecycleEvent) {
        (**self).on_event(event)
    }
}

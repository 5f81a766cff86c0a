//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod lifecycle_events;
pub mod process_runner;
pub mod receipt_repository;

pub use file_system::{FileSystem, FsError, FsResult};
pub use lifecycle_events::{LifecycleEvent, LifecycleEventSink, NoopEventSink};
pub use process_runner::{ProcessError, ProcessRunner};
pub use receipt_repository::{ReceiptError, ReceiptRepository, ReceiptResult};

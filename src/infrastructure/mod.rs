//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Child process execution and Ctrl-C handling
//! - `fs/` - Local file system
//! - `repositories/` - Install receipt persistence
//! - `events/` - Console and NDJSON event sinks
//! - `lock` - Per-project advisory lock

pub mod events;
pub mod fs;
pub mod lock;
pub mod process;
pub mod repositories;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use lock::ProjectLock;
pub use process::{InterruptFlag, SystemProcessRunner};
pub use repositories::JsonReceiptRepository;

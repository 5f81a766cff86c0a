//! buildcycle - build lifecycle driver for Python packages
//!
//! buildcycle runs the classic `setup.py` lifecycle targets (build, install,
//! uninstall, tox, clean) the way a small Makefile would, with explicit
//! configuration instead of ambient `python` and `sudo`, and a versioned
//! install receipt instead of a bare list of installed files.
//!
//! ## Architecture
//!
//! - `domain` - Targets, invocations, the install receipt, and ports
//! - `application` - The lifecycle driver and its install/uninstall use cases
//! - `infrastructure` - Process spawning, file system, receipt storage, events
//! - `presentation` - CLI definition and dependency wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LifecycleDriver, UninstallResult};
pub use config::DriverConfig;
pub use domain::entities::{InstallReceipt, ReceiptStatus};
pub use domain::value_objects::{ExitOutcome, Invocation, Target, UninstallPolicy};
pub use error::{DriverError, DriverResult};

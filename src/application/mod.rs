//! Application Layer
//!
//! Use cases that orchestrate the lifecycle targets.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LifecycleDriver` - Runs targets in order, prerequisites first
//! - `InstallUseCase` - Elevated install, manifest to receipt
//! - `UninstallUseCase` - Echo and remove every recorded path
//!
//! ## Services
//!
//! - `resolve_install_record` - Receipt first, legacy manifest as fallback

pub mod driver;
pub mod executor;
pub mod install;
pub mod layout;
mod record;
pub mod uninstall;

#[cfg(test)]
pub(crate) mod testing;

pub use driver::LifecycleDriver;
pub use executor::CommandExecutor;
pub use install::{InstallResult, InstallUseCase, ReceiptSummary};
pub use layout::{ProjectLayout, STATE_DIR};
pub use record::{resolve_install_record, InstallRecord, RecordSource};
pub use uninstall::{FailedRemoval, UninstallOptions, UninstallResult, UninstallUseCase};

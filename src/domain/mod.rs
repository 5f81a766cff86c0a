//! Domain Layer
//!
//! Lifecycle concepts without I/O: targets, invocations, exit outcomes,
//! the install receipt, and the ports the infrastructure layer implements.
//!
//! ## Structure
//!
//! - `entities/` - `InstallReceipt`
//! - `value_objects/` - `Target`, `Invocation`, `ExitOutcome`, `UninstallPolicy`
//! - `services/` - Invocation planner
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the driver with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Wires the driver to its adapters (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use buildcycle::presentation::factory;
//!
//! let driver = factory::create_driver(config, &project_root, false);
//! driver.run_targets(&[Target::Install])?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::Cli;
pub use factory::{create_driver, create_event_sink, ConcreteDriver};

//! Driver Factory
//!
//! Creates the lifecycle driver with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::LifecycleDriver;
use crate::config::DriverConfig;
use crate::domain::ports::LifecycleEventSink;
use crate::infrastructure::{
    ConsoleEventSink, JsonEventSink, JsonReceiptRepository, LocalFs, SystemProcessRunner,
};

/// Type alias for the concrete driver with all dependencies
pub type ConcreteDriver = LifecycleDriver<
    SystemProcessRunner,
    JsonReceiptRepository,
    LocalFs,
    Box<dyn LifecycleEventSink>,
>;

/// Event sink for the chosen output format
pub fn create_event_sink(json: bool) -> Box<dyn LifecycleEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout())
    }
}

/// Create a driver for the project at `project_root`.
///
/// Every child runs in `project_root`; elevated commands get the configured
/// prefix unless elevation is disabled.
pub fn create_driver(config: DriverConfig, project_root: &Path, json: bool) -> ConcreteDriver {
    let runner =
        SystemProcessRunner::new(project_root).with_elevation(config.elevate.prefix());

    LifecycleDriver::new(
        config,
        project_root,
        runner,
        JsonReceiptRepository::new(),
        LocalFs::new(),
        create_event_sink(json),
    )
}

//! ProcessRunner port - runs external tools
//!
//! The driver never interprets a tool's output; all it gets back is how the
//! process exited.

use crate::domain::value_objects::{ExitOutcome, Invocation};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProcessError {
    #[error("command not found: {program}")]
    NotFound { program: String },

    #[error("failed to start `{program}`: {message}")]
    Spawn { program: String, message: String },
}

/// Runs invocations to completion, one at a time
pub trait ProcessRunner {
    /// Run the invocation, blocking until it exits.
    fn run(&self, invocation: &Invocation) -> Result<ExitOutcome, ProcessError>;

    /// The command line that `run` would execute, elevation included.
    fn command_line(&self, invocation: &Invocation) -> String;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, invocation: &Invocation) -> Result<ExitOutcome, ProcessError> {
        (**self).run(invocation)
    }

    fn command_line(&self, invocation: &Invocation) -> String {
        (**self).command_line(invocation)
    }
}

//! System Process Runner
//!
//! Runs invocations with `std::process::Command`, inheriting the driver's
//! stdin/stdout/stderr so tools talk to the user directly.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{ProcessError, ProcessRunner};
use crate::domain::value_objects::{render_command_line, ExitOutcome, Invocation};

/// Process runner backed by the operating system
#[derive(Debug, Clone)]
pub struct SystemProcessRunner {
    /// Working directory for every child (the project root)
    cwd: PathBuf,
    /// Argv prefix for elevated invocations; `None` runs them directly
    elevate: Option<Vec<String>>,
}

impl SystemProcessRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            elevate: None,
        }
    }

    pub fn with_elevation(mut self, prefix: Option<Vec<String>>) -> Self {
        self.elevate = prefix.filter(|p| !p.is_empty());
        self
    }

    fn argv(&self, invocation: &Invocation) -> Vec<String> {
        invocation.wrapped(self.elevate.as_deref())
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ExitOutcome, ProcessError> {
        let argv = self.argv(invocation);
        let (program, args) = match argv.split_first() {
            Some(split) => split,
            None => {
                return Err(ProcessError::Spawn {
                    program: String::new(),
                    message: "empty command".to_string(),
                })
            }
        };

        debug!(command = %render_command_line(&argv), cwd = %self.cwd.display(), "spawning");

        let status = Command::new(program)
            .args(args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ProcessError::NotFound {
                    program: program.clone(),
                },
                _ => ProcessError::Spawn {
                    program: program.clone(),
                    message: e.to_string(),
                },
            })?;

        let outcome = ExitOutcome::from(status);
        debug!(command = %render_command_line(&argv), %outcome, "exited");
        Ok(outcome)
    }

    fn command_line(&self, invocation: &Invocation) -> String {
        render_command_line(&self.argv(invocation))
    }
}

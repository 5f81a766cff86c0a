//! Command executor
//!
//! Runs one invocation at a time on behalf of a target: reports lifecycle
//! events, honors `--dry-run` and stops the sequence once Ctrl-C was pressed.

use tracing::debug;

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink, ProcessRunner};
use crate::domain::value_objects::{ExitOutcome, Invocation, Target};
use crate::error::{DriverError, DriverResult};
use crate::infrastructure::InterruptFlag;

/// Exit status reported when Ctrl-C arrives between two commands
const SIGINT: i32 = 2;

pub struct CommandExecutor<'a> {
    runner: &'a dyn ProcessRunner,
    events: &'a dyn LifecycleEventSink,
    dry_run: bool,
    interrupt: Option<&'a InterruptFlag>,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, events: &'a dyn LifecycleEventSink) -> Self {
        Self {
            runner,
            events,
            dry_run: false,
            interrupt: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_interrupt(mut self, interrupt: Option<&'a InterruptFlag>) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn emit(&self, event: LifecycleEvent) {
        self.events.on_event(event);
    }

    pub fn command_line(&self, invocation: &Invocation) -> String {
        self.runner.command_line(invocation)
    }

    fn interrupted(&self) -> bool {
        self.interrupt.is_some_and(InterruptFlag::is_set)
    }

    /// Run `invocation` and return how it ended, whatever the exit status.
    ///
    /// Under dry-run the command is only reported and counts as successful.
    pub fn run(&self, target: Target, invocation: &Invocation) -> DriverResult<ExitOutcome> {
        if self.interrupted() {
            return Err(DriverError::Interrupted {
                outcome: ExitOutcome::Signaled(SIGINT),
            });
        }

        let command = self.command_line(invocation);
        if self.dry_run {
            self.emit(LifecycleEvent::CommandPlanned { target, command });
            return Ok(ExitOutcome::SUCCESS);
        }

        self.emit(LifecycleEvent::CommandStarted {
            target,
            command: command.clone(),
        });
        let outcome = self.runner.run(invocation)?;
        self.emit(LifecycleEvent::CommandFinished {
            target,
            command,
            outcome,
        });

        if self.interrupted() {
            debug!(%target, %outcome, "interrupted, stopping");
            return Err(DriverError::Interrupted { outcome });
        }
        Ok(outcome)
    }

    /// Run `invocation`, turning a non-zero exit into `ExternalFailure`
    pub fn run_checked(&self, target: Target, invocation: &Invocation) -> DriverResult<()> {
        let outcome = self.run(target, invocation)?;
        if outcome.success() {
            Ok(())
        } else {
            Err(DriverError::ExternalFailure {
                target,
                command: self.command_line(invocation),
                outcome,
            })
        }
    }
}

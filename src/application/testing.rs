//! Test doubles for the application layer

use std::cell::RefCell;

use crate::domain::ports::{LifecycleEvent, LifecycleEventSink, ProcessError, ProcessRunner};
use crate::domain::value_objects::{render_command_line, ExitOutcome, Invocation};

type Effect = Box<dyn Fn(&Invocation)>;

/// Process runner that records every invocation and answers from rules
/// matched against the rendered command line.
#[derive(Default)]
pub struct ScriptedRunner {
    calls: RefCell<Vec<String>>,
    outcomes: Vec<(String, ExitOutcome)>,
    missing: Vec<String>,
    effects: Vec<(String, Effect)>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands containing `needle` exit with `outcome`
    pub fn fail_on(mut self, needle: &str, outcome: ExitOutcome) -> Self {
        self.outcomes.push((needle.to_string(), outcome));
        self
    }

    /// `program` cannot be spawned
    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    /// Run `effect` whenever a command containing `needle` runs
    pub fn on_run(mut self, needle: &str, effect: impl Fn(&Invocation) + 'static) -> Self {
        self.effects.push((needle.to_string(), Box::new(effect)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<ExitOutcome, ProcessError> {
        if self.missing.iter().any(|p| p == invocation.program()) {
            return Err(ProcessError::NotFound {
                program: invocation.program().to_string(),
            });
        }

        let command = self.command_line(invocation);
        self.calls.borrow_mut().push(command.clone());

        for (needle, effect) in &self.effects {
            if command.contains(needle.as_str()) {
                effect(invocation);
            }
        }

        Ok(self
            .outcomes
            .iter()
            .find(|(needle, _)| command.contains(needle.as_str()))
            .map(|(_, outcome)| *outcome)
            .unwrap_or(ExitOutcome::SUCCESS))
    }

    fn command_line(&self, invocation: &Invocation) -> String {
        render_command_line(&invocation.wrapped(None))
    }
}

#[derive(Default)]
pub struct RecordingEvents(RefCell<Vec<LifecycleEvent>>);

impl RecordingEvents {
    pub fn take(&self) -> Vec<LifecycleEvent> {
        self.0.borrow_mut().drain(..).collect()
    }
}

impl LifecycleEventSink for RecordingEvents {
    fn on_event(&self, event: LifecycleEvent) {
        self.0.borrow_mut().push(event);
    }
}

//! Lifecycle Driver
//!
//! Runs make-style targets against a project. Targets run one at a time in
//! the order given, prerequisites first; the first failure stops the rest.

use std::path::PathBuf;

use crate::application::executor::CommandExecutor;
use crate::application::install::{InstallResult, InstallUseCase};
use crate::application::layout::ProjectLayout;
use crate::application::record::resolve_install_record;
use crate::application::uninstall::{UninstallOptions, UninstallResult, UninstallUseCase};
use crate::config::DriverConfig;
use crate::domain::ports::{
    FileSystem, LifecycleEvent, LifecycleEventSink, ProcessRunner, ReceiptRepository,
};
use crate::domain::services::{
    build_invocation, clean_invocation, expand_targets, plan_target, remove_invocation,
    tox_invocation,
};
use crate::domain::value_objects::{Invocation, Target};
use crate::error::DriverResult;
use crate::infrastructure::{InterruptFlag, ProjectLock};

pub struct LifecycleDriver<PR, RR, FS, ES>
where
    PR: ProcessRunner,
    RR: ReceiptRepository,
    FS: FileSystem,
    ES: LifecycleEventSink,
{
    config: DriverConfig,
    layout: ProjectLayout,
    runner: PR,
    receipts: RR,
    fs: FS,
    events: ES,
    dry_run: bool,
    interrupt: Option<InterruptFlag>,
}

impl<PR, RR, FS, ES> LifecycleDriver<PR, RR, FS, ES>
where
    PR: ProcessRunner,
    RR: ReceiptRepository,
    FS: FileSystem,
    ES: LifecycleEventSink,
{
    pub fn new(
        config: DriverConfig,
        project_root: impl Into<PathBuf>,
        runner: PR,
        receipts: RR,
        fs: FS,
        events: ES,
    ) -> Self {
        let layout = ProjectLayout::new(project_root, &config);
        Self {
            config,
            layout,
            runner,
            receipts,
            fs,
            events,
            dry_run: false,
            interrupt: None,
        }
    }

    /// Report commands instead of running them
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Stop the sequence once `flag` is set
    pub fn with_interrupt(mut self, flag: InterruptFlag) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    pub fn build(&self) -> DriverResult<()> {
        self.run_targets(&[Target::Build])
    }

    /// Build, then install with the packaging tool
    pub fn install(&self) -> DriverResult<()> {
        self.run_targets(&[Target::Install])
    }

    pub fn uninstall(&self) -> DriverResult<UninstallResult> {
        self.with_target(Target::Uninstall, |exec| self.run_uninstall(exec))
    }

    pub fn tox(&self) -> DriverResult<()> {
        self.run_targets(&[Target::Tox])
    }

    pub fn clean(&self) -> DriverResult<()> {
        self.run_targets(&[Target::Clean])
    }

    /// Run `targets` in order, like `make a b c`.
    ///
    /// An empty list runs the default target.
    pub fn run_targets(&self, targets: &[Target]) -> DriverResult<()> {
        let requested = if targets.is_empty() {
            std::slice::from_ref(&Target::DEFAULT)
        } else {
            targets
        };

        for target in expand_targets(requested) {
            self.run_target(target)?;
        }
        Ok(())
    }

    /// Run a single target, prerequisites excluded
    pub fn run_target(&self, target: Target) -> DriverResult<()> {
        match target {
            Target::Build => self.with_target(target, |exec| {
                exec.run_checked(target, &build_invocation(&self.config))
            }),
            Target::Install => self
                .with_target(target, |exec| self.run_install(exec))
                .map(drop),
            Target::Uninstall => self
                .with_target(target, |exec| self.run_uninstall(exec))
                .map(drop),
            Target::Tox => self.with_target(target, |exec| {
                exec.run_checked(target, &tox_invocation(&self.config))
            }),
            Target::Clean => self.with_target(target, |exec| {
                exec.run_checked(target, &clean_invocation(&self.config))
            }),
        }
    }

    /// Every command `target` would run, prerequisites included, without
    /// running anything.
    ///
    /// Uninstall's removals come from the current install record.
    pub fn plan(&self, target: Target) -> DriverResult<Vec<Invocation>> {
        let mut invocations = Vec::new();
        for step in expand_targets(&[target]) {
            if step == Target::Uninstall {
                let record = resolve_install_record(&self.layout, &self.receipts, &self.fs)?;
                if let Some(record) = record {
                    invocations.extend(
                        record
                            .receipt
                            .paths()
                            .iter()
                            .map(|path| remove_invocation(&self.config, path)),
                    );
                }
            } else {
                invocations.extend(plan_target(&self.config, step));
            }
        }
        Ok(invocations)
    }

    /// Command line the runner would execute for `invocation`
    pub fn command_line(&self, invocation: &Invocation) -> String {
        self.runner.command_line(invocation)
    }

    fn executor(&self) -> CommandExecutor<'_> {
        CommandExecutor::new(&self.runner, &self.events)
            .with_dry_run(self.dry_run)
            .with_interrupt(self.interrupt.as_ref())
    }

    fn with_target<T>(
        &self,
        target: Target,
        run: impl FnOnce(&CommandExecutor<'_>) -> DriverResult<T>,
    ) -> DriverResult<T> {
        let exec = self.executor();
        exec.emit(LifecycleEvent::TargetStarted { target });
        let result = run(&exec);
        exec.emit(LifecycleEvent::TargetFinished {
            target,
            success: result.is_ok(),
        });
        result
    }

    fn run_install(&self, exec: &CommandExecutor<'_>) -> DriverResult<InstallResult> {
        let _lock = self.lock()?;
        InstallUseCase::new(&self.receipts, &self.fs).execute(exec, &self.config, &self.layout)
    }

    fn run_uninstall(&self, exec: &CommandExecutor<'_>) -> DriverResult<UninstallResult> {
        // without a record uninstall must leave the project untouched, lock file included
        let has_record =
            self.fs.exists(self.layout.receipt()) || self.fs.exists(self.layout.manifest());
        let _lock = if has_record { self.lock()? } else { None };

        let options = UninstallOptions::new().with_policy(self.config.uninstall.policy);
        let result = UninstallUseCase::new(&self.receipts, &self.fs).execute(
            exec,
            &self.config,
            &self.layout,
            &options,
        )?;

        match result.failure(options.policy) {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }

    fn lock(&self) -> DriverResult<Option<ProjectLock>> {
        if self.dry_run {
            return Ok(None);
        }
        ProjectLock::acquire(self.layout.state_dir()).map(Some)
    }
}

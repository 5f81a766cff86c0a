//! Install Use Case
//!
//! Runs the elevated packaging-tool install and turns its `--record`
//! manifest into an install receipt. Build is a prerequisite handled by the
//! driver, not here.

use tracing::{debug, warn};

use crate::config::DriverConfig;
use crate::domain::entities::{InstallReceipt, ReceiptStatus};
use crate::domain::ports::{FileSystem, LifecycleEvent, ReceiptRepository};
use crate::domain::services::install_invocation;
use crate::domain::value_objects::Target;
use crate::error::{DriverError, DriverResult};

use crate::application::executor::CommandExecutor;
use crate::application::layout::ProjectLayout;

use super::result::{InstallResult, ReceiptSummary};

pub struct InstallUseCase<RR, FS>
where
    RR: ReceiptRepository,
    FS: FileSystem,
{
    receipts: RR,
    fs: FS,
}

impl<RR, FS> InstallUseCase<RR, FS>
where
    RR: ReceiptRepository,
    FS: FileSystem,
{
    pub fn new(receipts: RR, fs: FS) -> Self {
        Self { receipts, fs }
    }

    /// Run the install step.
    ///
    /// On success the manifest becomes a `complete` receipt, provided this
    /// run wrote it; a manifest left over from an earlier install is never
    /// recorded, and an existing receipt is left as it was. When the step
    /// fails after the tool (re)wrote the manifest, a `partial` receipt is
    /// kept so uninstall can clean up, and the failure is returned.
    pub fn execute(
        &self,
        exec: &CommandExecutor<'_>,
        config: &DriverConfig,
        layout: &ProjectLayout,
    ) -> DriverResult<InstallResult> {
        let invocation = install_invocation(config);

        if exec.is_dry_run() {
            exec.run(Target::Install, &invocation)?;
            return Ok(InstallResult::planned());
        }

        let before = self.fs.modified(layout.manifest())?;
        let run = exec.run(Target::Install, &invocation);

        let outcome = match run {
            Ok(outcome) if outcome.success() => {
                let after = self.fs.modified(layout.manifest())?;
                let receipt = if after.is_none() {
                    warn!(
                        manifest = %layout.manifest().display(),
                        "install succeeded but left no manifest; no receipt recorded"
                    );
                    None
                } else if after == before {
                    warn!(
                        manifest = %layout.manifest().display(),
                        "install succeeded but did not rewrite the manifest; no receipt recorded"
                    );
                    None
                } else {
                    self.record(exec, layout, ReceiptStatus::Complete)?
                };
                return Ok(InstallResult {
                    outcome: Some(outcome),
                    receipt,
                });
            }
            Ok(outcome) => outcome,
            Err(DriverError::Interrupted { outcome }) => {
                self.record_partial(exec, layout, before);
                return Err(DriverError::Interrupted { outcome });
            }
            Err(e) => return Err(e),
        };

        self.record_partial(exec, layout, before);
        Err(DriverError::ExternalFailure {
            target: Target::Install,
            command: exec.command_line(&invocation),
            outcome,
        })
    }

    /// Keep a partial receipt if the failed run touched the manifest.
    ///
    /// The original failure wins over anything that goes wrong here.
    fn record_partial(
        &self,
        exec: &CommandExecutor<'_>,
        layout: &ProjectLayout,
        before: Option<std::time::SystemTime>,
    ) {
        let after = match self.fs.modified(layout.manifest()) {
            Ok(after) => after,
            Err(e) => {
                warn!(error = %e, "could not inspect manifest after failed install");
                return;
            }
        };

        if after.is_none() || after == before {
            debug!("failed install left the manifest untouched, no receipt written");
            return;
        }

        if let Err(e) = self.record(exec, layout, ReceiptStatus::Partial) {
            warn!(error = %e, "could not record partial install");
        }
    }

    fn record(
        &self,
        exec: &CommandExecutor<'_>,
        layout: &ProjectLayout,
        status: ReceiptStatus,
    ) -> DriverResult<Option<ReceiptSummary>> {
        if !self.fs.exists(layout.manifest()) {
            return Ok(None);
        }

        let text = self.fs.read(layout.manifest())?;
        let receipt = InstallReceipt::from_manifest_text(status, &text)
            .with_manifest(layout.manifest());
        self.receipts.save(&receipt, layout.receipt())?;

        let summary = ReceiptSummary {
            path: layout.receipt().to_path_buf(),
            status,
            path_count: receipt.len(),
        };
        exec.emit(LifecycleEvent::ReceiptWritten {
            path: summary.path.clone(),
            status,
            path_count: summary.path_count,
        });
        Ok(Some(summary))
    }
}

//! Uninstall Use Case
//!
//! Removes every recorded path, in record order, with an elevated
//! `rm -rf`. The path is echoed before its removal runs.

use tracing::{debug, warn};

use crate::application::executor::CommandExecutor;
use crate::application::layout::ProjectLayout;
use crate::application::record::{resolve_install_record, InstallRecord, RecordSource};
use crate::config::DriverConfig;
use crate::domain::ports::{FileSystem, LifecycleEvent, ReceiptRepository};
use crate::domain::services::remove_invocation;
use crate::domain::value_objects::Target;
use crate::error::DriverResult;

use super::options::UninstallOptions;
use super::result::{FailedRemoval, UninstallResult};

/// Uninstall use case - removes installed paths tracked in the install record
pub struct UninstallUseCase<RR, FS>
where
    RR: ReceiptRepository,
    FS: FileSystem,
{
    receipts: RR,
    fs: FS,
}

impl<RR, FS> UninstallUseCase<RR, FS>
where
    RR: ReceiptRepository,
    FS: FileSystem,
{
    pub fn new(receipts: RR, fs: FS) -> Self {
        Self { receipts, fs }
    }

    /// Remove the recorded paths.
    ///
    /// Per-path failures are collected in the result; turning them into an
    /// error is left to the caller via [`UninstallResult::failure`]. Errors
    /// returned here are ones that stop the run outright (Ctrl-C, removal
    /// program missing, unreadable record).
    pub fn execute(
        &self,
        exec: &CommandExecutor<'_>,
        config: &DriverConfig,
        layout: &ProjectLayout,
        options: &UninstallOptions,
    ) -> DriverResult<UninstallResult> {
        let Some(record) = resolve_install_record(layout, &self.receipts, &self.fs)? else {
            exec.emit(LifecycleEvent::NothingToUninstall);
            return Ok(UninstallResult::default());
        };

        let mut result = UninstallResult::new(record.source.clone());
        let paths = record.receipt.paths();

        for (index, path) in paths.iter().enumerate() {
            exec.emit(LifecycleEvent::RemovingPath { path: path.clone() });

            let invocation = remove_invocation(config, path);
            let outcome = match exec.run(Target::Uninstall, &invocation) {
                Ok(outcome) => outcome,
                Err(e) => {
                    if !exec.is_dry_run() {
                        self.save_progress(&record, &result, layout);
                    }
                    return Err(e);
                }
            };

            if outcome.success() {
                result.removed.push(path.clone());
                continue;
            }

            exec.emit(LifecycleEvent::RemoveFailed {
                path: path.clone(),
                outcome,
            });
            result.failed.push(FailedRemoval {
                path: path.clone(),
                command: exec.command_line(&invocation),
                outcome,
            });

            if options.policy.stops_on_failure() {
                result.skipped = paths[index + 1..].to_vec();
                break;
            }
        }

        if !exec.is_dry_run() {
            self.update_record(&record, &result, layout)?;
        }
        Ok(result)
    }

    /// Drop removed paths from the record.
    ///
    /// A receipt that ends up empty is deleted. The legacy manifest is never
    /// rewritten: if paths are left over, they move to a new receipt so the
    /// next run only retries those.
    fn update_record(
        &self,
        record: &InstallRecord,
        result: &UninstallResult,
        layout: &ProjectLayout,
    ) -> DriverResult<()> {
        if result.removed.is_empty() {
            return Ok(());
        }

        let mut remaining = record.receipt.clone();
        remaining.retain_unremoved(&result.removed);

        match &record.source {
            RecordSource::Receipt(path) if remaining.is_empty() => {
                self.receipts.delete(path)?;
                debug!(path = %path.display(), "install receipt removed");
            }
            RecordSource::Receipt(path) => self.receipts.save(&remaining, path)?,
            RecordSource::LegacyManifest(_) if remaining.is_empty() => {}
            RecordSource::LegacyManifest(_) => {
                self.receipts.save(&remaining, layout.receipt())?;
                debug!(
                    path = %layout.receipt().display(),
                    paths = remaining.len(),
                    "leftover paths moved to install receipt"
                );
            }
        }
        Ok(())
    }

    fn save_progress(
        &self,
        record: &InstallRecord,
        result: &UninstallResult,
        layout: &ProjectLayout,
    ) {
        if let Err(e) = self.update_record(record, result, layout) {
            warn!(error = %e, "could not update install record after aborted uninstall");
        }
    }
}

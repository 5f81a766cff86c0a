//! Uninstall result types

use std::path::PathBuf;

use crate::application::record::RecordSource;
use crate::domain::value_objects::{ExitOutcome, Target, UninstallPolicy};
use crate::error::DriverError;

/// A recorded path whose removal command failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRemoval {
    pub path: PathBuf,
    pub command: String,
    pub outcome: ExitOutcome,
}

/// Result of an uninstall run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallResult {
    /// Where the recorded paths came from; `None` if nothing was installed
    pub source: Option<RecordSource>,
    /// Paths removed (or that would be removed in dry run)
    pub removed: Vec<PathBuf>,
    /// Paths whose removal failed
    pub failed: Vec<FailedRemoval>,
    /// Paths not attempted because fail-fast stopped early
    pub skipped: Vec<PathBuf>,
}

impl UninstallResult {
    pub fn new(source: RecordSource) -> Self {
        Self {
            source: Some(source),
            ..Self::default()
        }
    }

    /// No install record existed
    pub fn nothing_installed(&self) -> bool {
        self.source.is_none()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Error the run amounts to under `policy`, if any removal failed.
    ///
    /// Fail-fast surfaces the failing removal's own exit status; best-effort
    /// reports every path it could not remove.
    pub fn failure(&self, policy: UninstallPolicy) -> Option<DriverError> {
        let first = self.failed.first()?;
        Some(match policy {
            UninstallPolicy::FailFast => DriverError::ExternalFailure {
                target: Target::Uninstall,
                command: first.command.clone(),
                outcome: first.outcome,
            },
            UninstallPolicy::BestEffort => DriverError::UninstallIncomplete {
                failed: self.failed.iter().map(|f| f.path.clone()).collect(),
            },
        })
    }
}

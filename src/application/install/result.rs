//! Install result types

use std::path::PathBuf;

use crate::domain::entities::ReceiptStatus;
use crate::domain::value_objects::ExitOutcome;

/// The receipt an install attempt left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptSummary {
    pub path: PathBuf,
    pub status: ReceiptStatus,
    pub path_count: usize,
}

/// Result of the install step (build excluded)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallResult {
    /// Exit outcome of the packaging tool, `None` under dry-run
    pub outcome: Option<ExitOutcome>,
    /// Receipt written after the step, if any
    pub receipt: Option<ReceiptSummary>,
}

impl InstallResult {
    pub fn planned() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.outcome.map_or(true, |o| o.success())
    }
}

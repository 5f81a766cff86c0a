//! Error types for buildcycle
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ports::{FsError, ProcessError, ReceiptError};
use crate::domain::value_objects::{ExitOutcome, Target};

/// Result type alias for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Main error type for driver operations
#[derive(Error, Debug)]
pub enum DriverError {
    /// An external tool exited unsuccessfully.
    ///
    /// The tool already printed its own diagnostics, so the message is only
    /// shown in verbose logs.
    #[error("{target} failed: `{command}` exited with {outcome}")]
    ExternalFailure {
        target: Target,
        command: String,
        outcome: ExitOutcome,
    },

    /// One or more recorded paths could not be removed (best-effort uninstall)
    #[error("uninstall left {} path(s) behind: {}", .failed.len(), format_paths(.failed))]
    UninstallIncomplete { failed: Vec<PathBuf> },

    /// The sequence was interrupted with Ctrl-C
    #[error("interrupted")]
    Interrupted { outcome: ExitOutcome },

    /// Another driver holds the project lock
    #[error(
        "another buildcycle process is running in this project (lock: {path})\n  → Wait for it to finish, then retry"
    )]
    Locked { path: PathBuf },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Process exit code the binary should terminate with.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::ExternalFailure { outcome, .. } => outcome.exit_code(),
            DriverError::Interrupted { outcome } => match outcome.exit_code() {
                0 => 130,
                code => code,
            },
            DriverError::Process(ProcessError::NotFound { .. }) => 127,
            _ => 1,
        }
    }

    /// Whether the error originates from an external tool that already
    /// reported it on its own stderr.
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            DriverError::ExternalFailure { .. } | DriverError::Interrupted { .. }
        )
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

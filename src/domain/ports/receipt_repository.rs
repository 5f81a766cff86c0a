//! ReceiptRepository port - abstraction for install receipt persistence
//!
//! Lets the application layer load/save receipts without knowing about the
//! JSON layout on disk.

use std::path::{Path, PathBuf};

use crate::domain::entities::InstallReceipt;

/// Result type for receipt operations
pub type ReceiptResult<T> = Result<T, ReceiptError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("failed to access install receipt {path}: {message}")]
    Access { path: PathBuf, message: String },

    #[error(
        "install receipt corrupted: {path}\n  → Fix: remove the receipt and reinstall\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error(
        "install receipt format incompatible: {path} has version {found}, expected {expected}\n  → Fix: remove the receipt and reinstall"
    )]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// Abstract repository for install receipts
pub trait ReceiptRepository {
    /// Load the receipt at `path`; `Ok(None)` if there is none
    fn load(&self, path: &Path) -> ReceiptResult<Option<InstallReceipt>>;

    /// Save the receipt to `path`, replacing any previous one
    fn save(&self, receipt: &InstallReceipt, path: &Path) -> ReceiptResult<()>;

    /// Delete the receipt at `path` if it exists
    fn delete(&self, path: &Path) -> ReceiptResult<()>;
}

impl<T: ReceiptRepository + ?Sized> ReceiptRepository for &T {
    fn load(&self, path: &Path) -> ReceiptResult<Option<InstallReceipt>> {
        (**self).load(path)
    }

    fn save(&self, receipt: &InstallReceipt, path: &Path) -> ReceiptResult<()> {
        (**self).save(receipt, path)
    }

    fn delete(&self, path: &Path) -> ReceiptResult<()> {
        (**self).delete(path)
    }
}

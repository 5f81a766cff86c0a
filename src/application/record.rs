//! Install record resolution.
//!
//! The receipt at `.buildcycle/install-receipt.json` is the primary record.
//! Projects installed before the receipt existed only have the packaging
//! tool's `installed-files.txt`; it is read as a fallback and never rewritten.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{InstallReceipt, ReceiptStatus};
use crate::domain::ports::{FileSystem, ReceiptRepository};
use crate::error::DriverResult;

use super::layout::ProjectLayout;

/// Where an install record was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    Receipt(PathBuf),
    LegacyManifest(PathBuf),
}

impl RecordSource {
    pub fn path(&self) -> &Path {
        match self {
            RecordSource::Receipt(path) | RecordSource::LegacyManifest(path) => path,
        }
    }

    pub fn is_receipt(&self) -> bool {
        matches!(self, RecordSource::Receipt(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallRecord {
    pub source: RecordSource,
    pub receipt: InstallReceipt,
}

/// Find the install record for a project.
///
/// Returns `Ok(None)` when there is neither a receipt nor a manifest.
/// A receipt that exists but cannot be trusted (wrong version, checksum
/// mismatch) is an error, not a fallback to the manifest.
pub fn resolve_install_record<RR, FS>(
    layout: &ProjectLayout,
    receipts: &RR,
    fs: &FS,
) -> DriverResult<Option<InstallRecord>>
where
    RR: ReceiptRepository,
    FS: FileSystem,
{
    if let Some(receipt) = receipts.load(layout.receipt())? {
        debug!(path = %layout.receipt().display(), paths = receipt.len(), "using install receipt");
        return Ok(Some(InstallRecord {
            source: RecordSource::Receipt(layout.receipt().to_path_buf()),
            receipt,
        }));
    }

    let manifest = layout.manifest();
    if !fs.exists(manifest) {
        return Ok(None);
    }

    let text = fs.read(manifest)?;
    let receipt =
        InstallReceipt::from_manifest_text(ReceiptStatus::Complete, &text).with_manifest(manifest);
    debug!(path = %manifest.display(), paths = receipt.len(), "using legacy manifest");
    Ok(Some(InstallRecord {
        source: RecordSource::LegacyManifest(manifest.to_path_buf()),
        receipt,
    }))
}

//! JSON Receipt Repository
//!
//! Implements the ReceiptRepository port, storing the receipt as pretty JSON.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{checksum_paths, InstallReceipt, ReceiptStatus, RECEIPT_VERSION};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::receipt_repository::{ReceiptError, ReceiptRepository, ReceiptResult};
use crate::infrastructure::fs::LocalFs;

/// JSON-based receipt repository
pub struct JsonReceiptRepository<FS: FileSystem = LocalFs> {
    fs: FS,
}

impl JsonReceiptRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonReceiptRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk representation of the receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonReceipt {
    version: u32,
    #[serde(default)]
    status: ReceiptStatus,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    manifest: Option<String>,
    checksum: String,
    #[serde(default)]
    paths: Vec<String>,
}

/// Only the version, so a newer layout still yields a clear mismatch error
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl<FS: FileSystem> ReceiptRepository for JsonReceiptRepository<FS> {
    fn load(&self, path: &Path) -> ReceiptResult<Option<InstallReceipt>> {
        if !self.fs.exists(path) {
            return Ok(None);
        }

        let content = self.fs.read(path).map_err(|e| access_error(path, e))?;

        let probe: VersionProbe =
            serde_json::from_str(&content).map_err(|e| ReceiptError::Corrupted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if probe.version != RECEIPT_VERSION {
            return Err(ReceiptError::VersionMismatch {
                path: path.to_path_buf(),
                found: probe.version,
                expected: RECEIPT_VERSION,
            });
        }

        let stored: JsonReceipt =
            serde_json::from_str(&content).map_err(|e| ReceiptError::Corrupted {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let paths: Vec<PathBuf> = stored.paths.into_iter().map(PathBuf::from).collect();
        let actual = checksum_paths(&paths);
        if actual != stored.checksum {
            return Err(ReceiptError::Corrupted {
                path: path.to_path_buf(),
                message: format!(
                    "checksum mismatch (recorded {}, computed {})",
                    stored.checksum, actual
                ),
            });
        }

        Ok(Some(InstallReceipt::from_parts(
            stored.version,
            stored.status,
            stored.created_at,
            stored.manifest.map(PathBuf::from),
            paths,
        )))
    }

    fn save(&self, receipt: &InstallReceipt, path: &Path) -> ReceiptResult<()> {
        let stored = JsonReceipt {
            version: receipt.version(),
            status: receipt.status(),
            created_at: receipt.created_at(),
            manifest: receipt
                .manifest()
                .map(|p| p.to_string_lossy().into_owned()),
            checksum: receipt.checksum(),
            paths: receipt
                .paths()
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        };

        let mut content =
            serde_json::to_string_pretty(&stored).map_err(|e| ReceiptError::Access {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        content.push('\n');

        self.fs
            .write(path, &content)
            .map_err(|e| access_error(path, e))?;
        debug!(path = %path.display(), paths = receipt.len(), "receipt saved");
        Ok(())
    }

    fn delete(&self, path: &Path) -> ReceiptResult<()> {
        if self.fs.exists(path) {
            self.fs.remove(path).map_err(|e| access_error(path, e))?;
        }
        Ok(())
    }
}

fn access_error(path: &Path, err: FsError) -> ReceiptError {
    ReceiptError::Access {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

//! Install receipt entity - records what the last install put on disk
//!
//! The receipt replaces the bare `installed-files.txt` list as the hand-off
//! between install and uninstall. It's a pure data structure; persistence is
//! handled by a `ReceiptRepository`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Current receipt schema version
pub const RECEIPT_VERSION: u32 = 1;

/// Whether the install that produced the receipt finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    #[default]
    Complete,
    /// The install step failed after the packaging tool had already recorded
    /// some paths
    Partial,
}

impl std::fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceiptStatus::Complete => write!(f, "complete"),
            ReceiptStatus::Partial => write!(f, "partial"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallReceipt {
    version: u32,
    status: ReceiptStatus,
    created_at: DateTime<Utc>,
    /// Manifest the paths were read from, if any
    manifest: Option<PathBuf>,
    paths: Vec<PathBuf>,
}

impl InstallReceipt {
    pub fn new(status: ReceiptStatus, paths: Vec<PathBuf>) -> Self {
        Self {
            version: RECEIPT_VERSION,
            status,
            created_at: Utc::now(),
            manifest: None,
            paths,
        }
    }

    /// Reassemble a receipt from stored parts (used by repositories)
    pub fn from_parts(
        version: u32,
        status: ReceiptStatus,
        created_at: DateTime<Utc>,
        manifest: Option<PathBuf>,
        paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            version,
            status,
            created_at,
            manifest,
            paths,
        }
    }

    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = Some(manifest.into());
        self
    }

    /// Build a receipt from the packaging tool's record file content.
    ///
    /// One path per line; blank lines are skipped, everything else is kept
    /// verbatim and in order.
    pub fn from_manifest_text(status: ReceiptStatus, text: &str) -> Self {
        Self::new(status, parse_manifest(text))
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn status(&self) -> ReceiptStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn manifest(&self) -> Option<&Path> {
        self.manifest.as_deref()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drop every path in `removed`, keeping the order of the rest
    pub fn retain_unremoved(&mut self, removed: &[PathBuf]) {
        self.paths.retain(|p| !removed.contains(p));
    }

    /// SHA-256 over the recorded paths, `sha256:<hex>`
    pub fn checksum(&self) -> String {
        checksum_paths(&self.paths)
    }
}

/// Parse newline-delimited manifest content into paths
pub fn parse_manifest(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(PathBuf::from)
        .collect()
}

pub(crate) fn checksum_paths(paths: &[PathBuf]) -> String {
    let joined = paths
        .iter()
        .map(|p| p.to_string_lossy())
        .collect::<Vec<_>>()
        .join("\n");
    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

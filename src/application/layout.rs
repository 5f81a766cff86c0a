//! Project layout - where the driver finds and keeps its files

use std::path::{Path, PathBuf};

use crate::config::DriverConfig;

/// Directory under the project root holding driver state
pub const STATE_DIR: &str = ".buildcycle";

/// Absolute locations derived from the project root and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    manifest: PathBuf,
    receipt: PathBuf,
    state_dir: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, config: &DriverConfig) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(&config.install.manifest),
            receipt: root.join(&config.install.receipt),
            state_dir: root.join(STATE_DIR),
        }
    }

    /// The packaging tool's `--record` output
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    pub fn receipt(&self) -> &Path {
        &self.receipt
    }

    /// Holds the project lock, and the receipt by default
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }
}

//! Project Lock
//!
//! Advisory exclusive lock that keeps two drivers from installing or
//! uninstalling in the same project at once. Released on drop.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::{DriverError, DriverResult};

/// Lock file name inside the state directory
pub const LOCK_FILE: &str = "lock";

#[derive(Debug)]
pub struct ProjectLock {
    file: File,
    path: PathBuf,
}

impl ProjectLock {
    /// Try to take the lock without waiting.
    ///
    /// Returns `DriverError::Locked` if another process holds it.
    pub fn acquire(state_dir: &Path) -> DriverResult<Self> {
        fs::create_dir_all(state_dir)?;
        let path = state_dir.join(LOCK_FILE);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        match file.try_lock_exclusive() {
            Ok(()) => {
                debug!(path = %path.display(), "project lock acquired");
                Ok(Self { file, path })
            }
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(DriverError::Locked { path })
            }
            Err(e) => Err(DriverError::Io(e)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ProjectLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn second_acquire_is_refused_until_release() {
        let dir = tempdir().unwrap();
        let state = dir.path().join(".buildcycle");

        let first = ProjectLock::acquire(&state).unwrap();
        assert!(first.path().exists());

        let second = ProjectLock::acquire(&state);
        assert!(matches!(second, Err(DriverError::Locked { .. })));

        drop(first);
        assert!(ProjectLock::acquire(&state).is_ok());
    }
}

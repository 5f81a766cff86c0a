use std::path::{Path, PathBuf};

use buildcycle::application::STATE_DIR;
use buildcycle::config::PROJECT_CONFIG_FILE;

/// Packaging script that marks a project root
const SETUP_SCRIPT: &str = "setup.py";

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `buildcycle.toml` (explicit project config)
/// - `.buildcycle/` (driver state from an earlier run)
/// - `setup.py` (the packaging script every target drives)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(STATE_DIR).is_dir() {
            return dir.to_path_buf();
        }
        if dir.join(SETUP_SCRIPT).is_file() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

//! Test environment builder for isolated buildcycle testing.
//!
//! Provides `TestEnv` - a temp project with a `setup.py` marker, a temp
//! config home, and a directory of fake tools put first on `PATH`. Every
//! fake tool appends its argv to a shared log so tests can assert what ran.

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{FAKE_GIT, FAKE_PYTHON, FAKE_RM, FAKE_TOX};

/// Result of running a buildcycle CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory holding the user config home
    pub config_home: TempDir,
    /// Temporary directory with fake tools
    pub tools_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Project with `setup.py` and fake `python`, `tox` and `git` on `PATH`
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            config_home: TempDir::new().expect("Failed to create config home"),
            tools_dir: TempDir::new().expect("Failed to create tools dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_buildcycle")),
        };
        env.write_project_file("setup.py", "from setuptools import setup\nsetup()\n");
        env.write_tool("python", FAKE_PYTHON);
        env.write_tool("tox", FAKE_TOX);
        env.write_tool("git", FAKE_GIT);
        env
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Install the fake `rm` and return its absolute path
    pub fn fake_rm(&self) -> String {
        self.write_tool("fake-rm", FAKE_RM).display().to_string()
    }

    /// Write `buildcycle.toml` that routes removals through the fake `rm`
    pub fn use_fake_rm(&self) {
        let rm = self.fake_rm();
        self.write_project_file(
            "buildcycle.toml",
            &format!("[uninstall]\nremove_program = \"{rm}\"\n"),
        );
    }

    fn write_tool(&self, name: &str, script: &str) -> PathBuf {
        let path = self.tools_dir.path().join(name);
        fs::write(&path, script).expect("Failed to write tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
        path
    }

    /// Lines appended by the fake tools, in call order
    pub fn tool_log(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn log_path(&self) -> PathBuf {
        self.tools_dir.path().join("calls.log")
    }

    /// Run buildcycle in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    /// Run buildcycle from project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run buildcycle from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("PATH", self.search_path())
            .env("BUILDCYCLE_CONFIG_HOME", self.config_home.path())
            .env("BUILDCYCLE_ELEVATE", "none")
            .env("BUILDCYCLE_TEST_LOG", self.log_path())
            .env_remove("BUILDCYCLE_PYTHON")
            .env_remove("BUILDCYCLE_MANIFEST")
            .env_remove("BUILDCYCLE_UNINSTALL_POLICY")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute buildcycle");
        Self::output_to_result(output)
    }

    fn search_path(&self) -> OsString {
        let mut dirs = vec![self.tools_dir.path().to_path_buf()];
        if let Some(path) = std::env::var_os("PATH") {
            dirs.extend(std::env::split_paths(&path));
        }
        std::env::join_paths(dirs).expect("Failed to build PATH")
    }

    /// Convert Command output to TestResult
    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file, empty if missing
    pub fn read_project_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.project_path(relative_path)).unwrap_or_default()
    }

    /// Parsed install receipt, if one exists
    pub fn read_receipt(&self) -> Option<serde_json::Value> {
        let path = self.project_path(".buildcycle/install-receipt.json");
        let content = fs::read_to_string(path).ok()?;
        Some(serde_json::from_str(&content).expect("receipt is valid JSON"))
    }

    /// Names of the entries at the project root, sorted
    pub fn project_entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.project_root.path())
            .expect("Failed to list project")
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

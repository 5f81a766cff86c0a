//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UninstallPolicy;

/// Packaging tool settings (`python setup.py ...`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonConfig {
    /// Interpreter, resolved through `PATH` like `/usr/bin/env python`
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    #[serde(default = "default_setup_script")]
    pub setup_script: String,

    /// Extra arguments appended to `setup.py build`
    #[serde(default)]
    pub build_args: Vec<String>,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            setup_script: default_setup_script(),
            build_args: Vec::new(),
        }
    }
}

fn default_interpreter() -> String {
    "python".to_string()
}

fn default_setup_script() -> String {
    "setup.py".to_string()
}

/// Privilege elevation settings
///
/// ```toml
/// [elevate]
/// enabled = true
/// program = "sudo"
/// args = ["-E"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElevateConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_elevate_program")]
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ElevateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_elevate_program(),
            args: Vec::new(),
        }
    }
}

impl ElevateConfig {
    /// Argv prefix for elevated commands, `None` when elevation is off
    pub fn prefix(&self) -> Option<Vec<String>> {
        if !self.enabled {
            return None;
        }
        let mut prefix = vec![self.program.clone()];
        prefix.extend(self.args.iter().cloned());
        Some(prefix)
    }
}

fn default_elevate_program() -> String {
    "sudo".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Record file the packaging tool writes (`--record`)
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Structured receipt written by the driver
    #[serde(default = "default_receipt")]
    pub receipt: PathBuf,

    /// Pass `--single-version-externally-managed`
    #[serde(default = "default_true")]
    pub single_version_externally_managed: bool,

    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            receipt: default_receipt(),
            single_version_externally_managed: true,
            extra_args: Vec::new(),
        }
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("installed-files.txt")
}

fn default_receipt() -> PathBuf {
    PathBuf::from(".buildcycle/install-receipt.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UninstallConfig {
    #[serde(default)]
    pub policy: UninstallPolicy,

    #[serde(default = "default_remove_program")]
    pub remove_program: String,

    #[serde(default = "default_remove_args")]
    pub remove_args: Vec<String>,
}

impl Default for UninstallConfig {
    fn default() -> Self {
        Self {
            policy: UninstallPolicy::default(),
            remove_program: default_remove_program(),
            remove_args: default_remove_args(),
        }
    }
}

fn default_remove_program() -> String {
    "rm".to_string()
}

fn default_remove_args() -> Vec<String> {
    vec!["-rf".to_string()]
}

/// Test-matrix runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToxConfig {
    #[serde(default = "default_tox_program")]
    pub program: String,

    #[serde(default = "default_tox_args")]
    pub args: Vec<String>,
}

impl Default for ToxConfig {
    fn default() -> Self {
        Self {
            program: default_tox_program(),
            args: default_tox_args(),
        }
    }
}

fn default_tox_program() -> String {
    "tox".to_string()
}

fn default_tox_args() -> Vec<String> {
    vec![
        "--skip-missing-interpreters".to_string(),
        "--develop".to_string(),
    ]
}

/// Version-control clean utility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanConfig {
    #[serde(default = "default_clean_program")]
    pub program: String,

    #[serde(default = "default_clean_args")]
    pub args: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            program: default_clean_program(),
            args: default_clean_args(),
        }
    }
}

fn default_clean_program() -> String {
    "git".to_string()
}

fn default_clean_args() -> Vec<String> {
    vec!["clean".to_string(), "-xdf".to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DriverConfig {
    #[serde(default)]
    pub python: PythonConfig,

    #[serde(default)]
    pub elevate: ElevateConfig,

    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub uninstall: UninstallConfig,

    #[serde(default)]
    pub tox: ToxConfig,

    #[serde(default)]
    pub clean: CleanConfig,
}

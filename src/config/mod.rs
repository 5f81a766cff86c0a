//! Configuration module for buildcycle
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUILDCYCLE_*)
//! 3. The first config file found: `--config`, `./buildcycle.toml`,
//!    `~/.config/buildcycle/config.toml`
//! 4. Built-in defaults (lowest priority), which reproduce the classic
//!    `python setup.py` / `sudo` / `tox` / `git clean -xdf` workflow

mod loader;
mod types;

pub use loader::{
    load_with_warnings, resolve, user_config_path, with_env_overrides, ConfigError, ConfigWarning,
    LoadedConfig, CONFIG_HOME_VAR, PROJECT_CONFIG_FILE,
};
pub use types::{
    CleanConfig, DriverConfig, ElevateConfig, InstallConfig, PythonConfig, ToxConfig,
    UninstallConfig,
};

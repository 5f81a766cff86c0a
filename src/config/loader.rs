//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::UninstallPolicy;

use super::types::DriverConfig;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "buildcycle.toml";

/// Overrides the user config directory (mainly for tests)
pub const CONFIG_HOME_VAR: &str = "BUILDCYCLE_CONFIG_HOME";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A config file key the schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },

    /// An environment override whose value cannot be used; it is ignored
    InvalidEnvValue {
        var: String,
        value: String,
        expected: &'static [&'static str],
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unrecognized config entry '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnvValue {
                var,
                value,
                expected,
            } => write!(
                f,
                "ignoring {}='{}': expected one of {}",
                var,
                value,
                expected.join(", ")
            ),
        }
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: DriverConfig,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(DriverConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(DriverConfig, Vec<ConfigWarning>), ConfigError> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: DriverConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a project.
///
/// The first of these wins: the explicit `--config` file, the project's
/// `buildcycle.toml`, the user config, built-in defaults. Environment
/// overrides (`BUILDCYCLE_*`) are applied on top.
///
/// `explicit` is used as given; a relative path resolves against the
/// process working directory, not `project_root`.
pub fn resolve(project_root: &Path, explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    resolve_with_env(project_root, explicit, user_config_path(), |key| {
        std::env::var(key).ok()
    })
}

pub(crate) fn resolve_with_env<F>(
    project_root: &Path,
    explicit: Option<&Path>,
    user_config: Option<PathBuf>,
    env: F,
) -> Result<LoadedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project_config = project_root.join(PROJECT_CONFIG_FILE);
            if project_config.is_file() {
                Some(project_config)
            } else {
                user_config.filter(|p| p.is_file())
            }
        }
    };

    let (config, source, mut warnings) = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            (config, Some(path), warnings)
        }
        None => (DriverConfig::default(), None, Vec::new()),
    };

    let (config, env_warnings) = with_env_overrides(config, env);
    warnings.extend(env_warnings);

    Ok(LoadedConfig {
        config,
        source,
        warnings,
    })
}

/// Apply environment variable overrides (BUILDCYCLE_* prefix)
pub fn with_env_overrides<F>(mut config: DriverConfig, env: F) -> (DriverConfig, Vec<ConfigWarning>)
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // BUILDCYCLE_PYTHON
    if let Some(python) = env("BUILDCYCLE_PYTHON").filter(|v| !v.trim().is_empty()) {
        config.python.interpreter = python.trim().to_string();
    }

    // BUILDCYCLE_ELEVATE: "none" disables, anything else is a command line
    if let Some(elevate) = env("BUILDCYCLE_ELEVATE") {
        let mut words = elevate.split_whitespace().map(str::to_string);
        match words.next() {
            None => config.elevate.enabled = false,
            Some(first) if matches!(first.as_str(), "none" | "off" | "0" | "false") => {
                config.elevate.enabled = false;
            }
            Some(first) => {
                config.elevate.enabled = true;
                config.elevate.program = first;
                config.elevate.args = words.collect();
            }
        }
    }

    // BUILDCYCLE_MANIFEST
    if let Some(manifest) = env("BUILDCYCLE_MANIFEST").filter(|v| !v.trim().is_empty()) {
        config.install.manifest = PathBuf::from(manifest.trim());
    }

    // BUILDCYCLE_UNINSTALL_POLICY
    if let Some(policy) = env("BUILDCYCLE_UNINSTALL_POLICY") {
        match UninstallPolicy::parse(&policy) {
            Some(policy) => config.uninstall.policy = policy,
            None => warnings.push(ConfigWarning::InvalidEnvValue {
                var: "BUILDCYCLE_UNINSTALL_POLICY".to_string(),
                value: policy,
                expected: UninstallPolicy::NAMES,
            }),
        }
    }

    (config, warnings)
}

/// `<config dir>/buildcycle/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_HOME_VAR) {
        return Some(PathBuf::from(dir).join("config.toml"));
    }
    dirs::config_dir().map(|d| d.join("buildcycle/config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "python",
        "interpreter",
        "setup_script",
        "build_args",
        "elevate",
        "enabled",
        "program",
        "args",
        "install",
        "manifest",
        "receipt",
        "single_version_externally_managed",
        "extra_args",
        "uninstall",
        "policy",
        "remove_program",
        "remove_args",
        "tox",
        "clean",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

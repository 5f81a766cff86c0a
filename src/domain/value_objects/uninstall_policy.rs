//! Uninstall policy - what happens when a recorded path cannot be removed

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum UninstallPolicy {
    /// Attempt every path and report all failures at the end
    #[default]
    BestEffort,
    /// Stop at the first path that cannot be removed
    FailFast,
}

impl UninstallPolicy {
    /// Accepted spellings, as shown in messages
    pub const NAMES: &'static [&'static str] = &["best-effort", "fail-fast"];

    pub fn stops_on_failure(&self) -> bool {
        matches!(self, UninstallPolicy::FailFast)
    }

    /// Parse the spelling used in config files and environment variables
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "best-effort" | "besteffort" => Some(UninstallPolicy::BestEffort),
            "fail-fast" | "failfast" => Some(UninstallPolicy::FailFast),
            _ => None,
        }
    }
}

impl std::fmt::Display for UninstallPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UninstallPolicy::BestEffort => write!(f, "best-effort"),
            UninstallPolicy::FailFast => write!(f, "fail-fast"),
        }
    }
}

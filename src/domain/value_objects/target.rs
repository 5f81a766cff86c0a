//! Target value object - a named lifecycle operation

use serde::{Deserialize, Serialize};

/// Lifecycle target, as named on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Run the packaging tool's build step
    Build,
    /// Build, then install with elevated privileges and record installed paths
    Install,
    /// Remove every path recorded by the last install
    Uninstall,
    /// Run the test matrix
    Tox,
    /// Remove all untracked and ignored files from the working tree
    Clean,
}

impl Target {
    /// All targets in declaration order
    pub const ALL: [Target; 5] = [
        Target::Build,
        Target::Install,
        Target::Uninstall,
        Target::Tox,
        Target::Clean,
    ];

    /// Target run when none is named (the first one, as in make)
    pub const DEFAULT: Target = Target::Build;

    /// Targets that must complete before this one starts
    pub fn prerequisites(&self) -> &'static [Target] {
        match self {
            Target::Install => &[Target::Build],
            _ => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Build => "build",
            Target::Install => "install",
            Target::Uninstall => "uninstall",
            Target::Tox => "tox",
            Target::Clean => "clean",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

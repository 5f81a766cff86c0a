//! Uninstall options

use crate::domain::value_objects::UninstallPolicy;

/// Options for the uninstall target
#[derive(Debug, Clone, Copy, Default)]
pub struct UninstallOptions {
    /// What to do when a removal fails
    pub policy: UninstallPolicy,
}

impl UninstallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: UninstallPolicy) -> Self {
        self.policy = policy;
        self
    }
}

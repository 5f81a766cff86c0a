//! Uninstall use case

mod options;
mod result;
mod use_case;

pub use options::UninstallOptions;
pub use result::{FailedRemoval, UninstallResult};
pub use use_case::UninstallUseCase;

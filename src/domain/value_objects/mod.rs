//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod exit_outcome;
mod invocation;
mod target;
mod uninstall_policy;

pub use exit_outcome::ExitOutcome;
pub use invocation::{render_command_line, Invocation};
pub use target::Target;
pub use uninstall_policy::UninstallPolicy;

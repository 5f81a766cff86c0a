//! Domain Services
//!
//! - `planner` - Maps targets to the external commands they run

pub mod planner;

pub use planner::{
    build_invocation, clean_invocation, expand_targets, install_invocation, plan_target,
    remove_invocation, tox_invocation,
};

//! Command handlers for the buildcycle binary

pub mod project_root;
pub mod run;

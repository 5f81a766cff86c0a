//! Common test utilities for buildcycle CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project with fake packaging, test and VCS tools
//! - Fixtures: Reusable manifest content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

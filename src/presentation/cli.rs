//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Targets are positional, like `make build install`
//! - No target means the default target (`build`)

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::{Target, UninstallPolicy};

/// buildcycle - build, install, test and clean a Python package
#[derive(Parser, Debug)]
#[command(name = "buildcycle")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'buildcycle' without a target to build.")]
pub struct Cli {
    /// Targets to run, in order
    #[arg(value_enum)]
    pub targets: Vec<Target>,

    /// Run in DIR instead of the current directory
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Use this config file instead of looking one up
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the commands that would run without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// What uninstall does when a path cannot be removed
    #[arg(long, value_enum)]
    pub policy: Option<UninstallPolicy>,

    /// Emit NDJSON events on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

//! buildcycle CLI - build lifecycle driver for Python packages
//!
//! Usage: buildcycle [OPTIONS] [TARGET]...
//!
//! Targets:
//!   build      Build the package (default)
//!   install    Build, then install with elevated privileges
//!   uninstall  Remove every installed path
//!   tox        Run the tox test matrix
//!   clean      Remove untracked and ignored files

mod commands;

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use buildcycle::presentation::Cli;
use buildcycle::DriverError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run::cmd_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err)),
    }
}

/// Log level from `-v` count; `RUST_LOG` wins when set
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Print the error unless a child already reported it, and pick the exit code
fn report(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DriverError>() {
        Some(driver_err) if driver_err.is_external() => {
            debug!("{}", driver_err);
            driver_err.exit_code()
        }
        Some(driver_err) => {
            eprintln!("error: {:#}", err);
            driver_err.exit_code()
        }
        None => {
            eprintln!("error: {:#}", err);
            1
        }
    }
}

//! Run command handler
//!
//! Resolves the project and its config, then runs the requested targets.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use buildcycle::config;
use buildcycle::infrastructure::InterruptFlag;
use buildcycle::presentation::{factory, Cli};

use super::project_root::discover_project_root;

/// Execute the requested targets
pub fn cmd_run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let project_root = resolve_project_root(cli, &cwd)?;
    debug!(root = %project_root.display(), "project root");

    // Like -C, --config is relative to where buildcycle was started
    let explicit_config = cli.config.as_ref().map(|path| cwd.join(path));
    let loaded = config::resolve(&project_root, explicit_config.as_deref())
        .context("failed to load configuration")?;
    if let Some(source) = &loaded.source {
        debug!(config = %source.display(), "loaded config");
    }
    for warning in &loaded.warnings {
        warn!("{}", warning);
    }

    let mut config = loaded.config;
    if let Some(policy) = cli.policy {
        config.uninstall.policy = policy;
    }

    let interrupt = InterruptFlag::new();
    if let Err(e) = interrupt.install() {
        warn!(error = %e, "could not install Ctrl-C handler");
    }

    let driver = factory::create_driver(config, &project_root, cli.json)
        .with_dry_run(cli.dry_run)
        .with_interrupt(interrupt);

    driver.run_targets(&cli.targets)?;
    Ok(())
}

fn resolve_project_root(cli: &Cli, cwd: &Path) -> Result<PathBuf> {
    match &cli.directory {
        Some(dir) => {
            let dir = cwd.join(dir);
            if !dir.is_dir() {
                anyhow::bail!("no such directory: {}", dir.display());
            }
            Ok(dir)
        }
        None => Ok(discover_project_root(cwd)),
    }
}

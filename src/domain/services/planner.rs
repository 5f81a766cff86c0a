//! Invocation Planner
//!
//! Turns a target plus the driver configuration into the external commands
//! it runs. Pure: no I/O, no process spawning.

use std::path::Path;

use crate::config::DriverConfig;
use crate::domain::value_objects::{Invocation, Target};

/// `<python> setup.py build [build_args...]`
pub fn build_invocation(config: &DriverConfig) -> Invocation {
    Invocation::new(&config.python.interpreter)
        .arg(&config.python.setup_script)
        .arg("build")
        .args(config.python.build_args.iter().cloned())
}

/// `<python> setup.py install --record <manifest> --single-version-externally-managed`,
/// elevated
pub fn install_invocation(config: &DriverConfig) -> Invocation {
    let mut inv = Invocation::new(&config.python.interpreter)
        .arg(&config.python.setup_script)
        .arg("install")
        .arg("--record")
        .arg(config.install.manifest.to_string_lossy());
    if config.install.single_version_externally_managed {
        inv = inv.arg("--single-version-externally-managed");
    }
    inv.args(config.install.extra_args.iter().cloned())
        .elevated(true)
}

/// `rm -rf -- <path>`, elevated
pub fn remove_invocation(config: &DriverConfig, path: &Path) -> Invocation {
    Invocation::new(&config.uninstall.remove_program)
        .args(config.uninstall.remove_args.iter().cloned())
        .arg("--")
        .arg(path.to_string_lossy())
        .elevated(true)
}

pub fn tox_invocation(config: &DriverConfig) -> Invocation {
    Invocation::new(&config.tox.program).args(config.tox.args.iter().cloned())
}

pub fn clean_invocation(config: &DriverConfig) -> Invocation {
    Invocation::new(&config.clean.program).args(config.clean.args.iter().cloned())
}

/// Commands a target runs on its own, prerequisites excluded.
///
/// Uninstall's removals depend on the install record, so they are planned
/// by the uninstall use case rather than here.
pub fn plan_target(config: &DriverConfig, target: Target) -> Vec<Invocation> {
    match target {
        Target::Build => vec![build_invocation(config)],
        Target::Install => vec![install_invocation(config)],
        Target::Uninstall => Vec::new(),
        Target::Tox => vec![tox_invocation(config)],
        Target::Clean => vec![clean_invocation(config)],
    }
}

/// Expand targets with their prerequisites, in execution order.
///
/// Like make, a target already run earlier in the same sequence is not run
/// again (`buildcycle build install` builds once).
pub fn expand_targets(targets: &[Target]) -> Vec<Target> {
    let mut order = Vec::new();
    for target in targets {
        push_with_prerequisites(*target, &mut order);
    }
    order
}

fn push_with_prerequisites(target: Target, order: &mut Vec<Target>) {
    for prerequisite in target.prerequisites() {
        push_with_prerequisites(*prerequisite, order);
    }
    if !order.contains(&target) {
        order.push(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn build_runs_setup_py_build() {
        let inv = build_invocation(&DriverConfig::default());
        assert_eq!(inv.to_string(), "python setup.py build");
        assert!(!inv.is_elevated());
    }

    #[test]
    fn install_records_manifest_and_is_elevated() {
        let inv = install_invocation(&DriverConfig::default());
        assert_eq!(
            inv.to_string(),
            "python setup.py install --record installed-files.txt --single-version-externally-managed"
        );
        assert!(inv.is_elevated());
    }

    #[test]
    fn install_honors_config() {
        let mut config = DriverConfig::default();
        config.install.single_version_externally_managed = false;
        config.install.manifest = PathBuf::from("out/record.txt");
        config.install.extra_args = vec!["--prefix=/opt/pkg".to_string()];

        let inv = install_invocation(&config);
        assert_eq!(
            inv.to_string(),
            "python setup.py install --record out/record.txt --prefix=/opt/pkg"
        );
    }

    #[test]
    fn remove_is_recursive_forced_and_elevated() {
        let inv = remove_invocation(&DriverConfig::default(), Path::new("/usr/local/bin/pkgtool"));
        assert_eq!(inv.to_string(), "rm -rf -- /usr/local/bin/pkgtool");
        assert!(inv.is_elevated());
    }

    #[test]
    fn tox_and_clean_use_documented_flags() {
        let config = DriverConfig::default();
        assert_eq!(
            tox_invocation(&config).to_string(),
            "tox --skip-missing-interpreters --develop"
        );
        assert_eq!(clean_invocation(&config).to_string(), "git clean -xdf");
    }

    #[test]
    fn uninstall_has_no_static_plan() {
        assert!(plan_target(&DriverConfig::default(), Target::Uninstall).is_empty());
    }

    #[test]
    fn install_expands_to_build_first() {
        assert_eq!(
            expand_targets(&[Target::Install]),
            vec![Target::Build, Target::Install]
        );
    }

    #[test]
    fn expansion_does_not_repeat_targets() {
        assert_eq!(
            expand_targets(&[Target::Build, Target::Install, Target::Tox]),
            vec![Target::Build, Target::Install, Target::Tox]
        );
        assert_eq!(
            expand_targets(&[Target::Clean, Target::Clean]),
            vec![Target::Clean]
        );
    }
}

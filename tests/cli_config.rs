//! End-to-end tests for configuration lookup and overrides.

#![cfg(unix)]

mod common;

use common::TestEnv;

#[test]
fn project_config_sets_build_args() {
    let env = TestEnv::new();
    env.write_project_file(
        "buildcycle.toml",
        r#"
[python]
build_args = ["--build-base", "out"]
"#,
    );

    let result = env.run(&["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.tool_log(), vec!["python setup.py build --build-base out"]);
}

#[test]
fn unknown_keys_warn_but_do_not_fail() {
    let env = TestEnv::new();
    env.write_project_file(
        "buildcycle.toml",
        r#"
[python]
interpeter = "python3"
"#,
    );

    let result = env.run(&["build"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(
        result.stderr.contains("'interpeter'"),
        "stderr:\n{}",
        result.stderr
    );
    assert!(
        result.stderr.contains("did you mean 'interpreter'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn invalid_config_is_an_error() {
    let env = TestEnv::new();
    env.write_project_file("buildcycle.toml", "[python\ninterpreter = ");

    let result = env.run(&["build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.starts_with("error:"), "stderr:\n{}", result.stderr);
    assert!(env.tool_log().is_empty());
}

#[test]
fn explicit_config_must_exist() {
    let env = TestEnv::new();

    let result = env.run(&["--config", "missing.toml", "build"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("missing.toml"), "stderr:\n{}", result.stderr);
}

#[test]
fn explicit_config_is_relative_to_invocation_directory() {
    let env = TestEnv::new();
    env.write_project_file("tests/local.toml", "[tox]\nargs = [\"-e\", \"py312\"]\n");

    let result = env.run_from_with_env(
        &env.project_path("tests"),
        &["-c", "local.toml", "tox"],
        &[],
    );

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.tool_log(), vec!["tox -e py312"]);
}

#[test]
fn user_config_applies_when_project_has_none() {
    let env = TestEnv::new();
    std::fs::write(
        env.config_home.path().join("config.toml"),
        "[tox]\nargs = [\"-p\", \"auto\"]\n",
    )
    .unwrap();

    let result = env.run(&["tox"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.tool_log(), vec!["tox -p auto"]);
}

#[test]
fn env_interpreter_beats_config_file() {
    let env = TestEnv::new();
    env.write_project_file(
        "buildcycle.toml",
        "[python]\ninterpreter = \"/nowhere/python\"\n",
    );

    let result = env.run_with_env(&["build"], &[("BUILDCYCLE_PYTHON", "python")]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.tool_log(), vec!["python setup.py build"]);
}

#[test]
fn manifest_name_can_be_configured() {
    let env = TestEnv::new();
    env.use_fake_rm();
    env.write_project_file("record.txt", "/opt/pkg\n");

    let result = env.run_with_env(
        &["uninstall"],
        &[("BUILDCYCLE_MANIFEST", "record.txt")],
    );

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.stdout, "/opt/pkg\n");
}

#[test]
fn bad_policy_env_value_is_named_in_warning() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["uninstall"], &[("BUILDCYCLE_UNINSTALL_POLICY", "sometimes")]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(
        result
            .stderr
            .contains("ignoring BUILDCYCLE_UNINSTALL_POLICY='sometimes': expected one of best-effort, fail-fast"),
        "stderr:\n{}",
        result.stderr
    );
}

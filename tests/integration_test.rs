// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use version_bump::{update_version, validate_inputs, PartialInputs};

/// Run the binary the way a GitHub Actions runner would: inputs as `INPUT_*` variables
/// and outputs appended to the `GITHUB_OUTPUT` file.
fn run_action(dir: &Path, inputs: &[(&str, &str)], extra_args: &[&str]) -> (Output, String) {
    let output_file = dir.join("github_output");
    fs::write(&output_file, "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .env_clear()
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("GITHUB_OUTPUT", &output_file)
        .envs(inputs.iter().copied())
        .args(extra_args)
        .output()
        .expect("Failed to execute version-bump");

    let written = fs::read_to_string(&output_file).unwrap();
    (output, written)
}

#[test]
fn test_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("version-bump"));
    assert!(stdout.contains("INPUT_VERSION_STRATEGY"));
}

#[test]
fn test_mainline_bump_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let (output, written) = run_action(
        dir.path(),
        &[
            ("INPUT_LATEST_MAIN_VERSION", "1.2.3"),
            ("INPUT_BRANCH_NAME", "main"),
            ("INPUT_VERSION_STRATEGY", "minor"),
            ("INPUT_VERSION_PREFIX", "v"),
        ],
        &["--quiet"],
    );

    assert!(output.status.success());
    assert_eq!(
        written,
        "new_version=v1.3.0\nnew_version_raw=1.3.0\nprefix=v\n"
    );
}

#[test]
fn test_branch_bump_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let (output, written) = run_action(
        dir.path(),
        &[
            ("INPUT_LATEST_MAIN_VERSION", "1.2.3"),
            ("INPUT_LATEST_BRANCH_VERSION", "v1.2.3-feature-new.5"),
            ("INPUT_BRANCH_NAME", "feature/new"),
            ("INPUT_VERSION_STRATEGY", ""),
            ("INPUT_VERSION_PREFIX", "v"),
            ("INPUT_ADDITIONAL_NAME", ""),
            ("INPUT_MAINLINE_VERSIONING_BRANCHES", ""),
        ],
        &["--quiet"],
    );

    assert!(output.status.success());
    assert_eq!(
        written,
        "new_version=v1.2.3-feature-new.6\nnew_version_raw=6\nprefix=v1.2.3-feature-new\n"
    );
}

#[test]
fn test_cli_flags_override_environment() {
    let dir = tempfile::tempdir().unwrap();
    let (output, written) = run_action(
        dir.path(),
        &[
            ("INPUT_LATEST_MAIN_VERSION", "1.2.3"),
            ("INPUT_BRANCH_NAME", "main"),
            ("INPUT_VERSION_STRATEGY", "minor"),
        ],
        &["--strategy", "major", "--quiet"],
    );

    assert!(output.status.success());
    assert!(written.starts_with("new_version=2.0.0\n"));
}

#[test]
fn test_failure_reports_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (output, written) = run_action(
        dir.path(),
        &[
            ("INPUT_LATEST_MAIN_VERSION", "1.2"),
            ("INPUT_BRANCH_NAME", "main"),
        ],
        &[],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(written.is_empty());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("::error::Invalid version format: 1.2"));
}

#[test]
fn test_unknown_strategy_fails_step() {
    let dir = tempfile::tempdir().unwrap();
    let (output, written) = run_action(
        dir.path(),
        &[
            ("INPUT_BRANCH_NAME", "master"),
            ("INPUT_VERSION_STRATEGY", "bogus"),
        ],
        &[],
    );

    assert!(!output.status.success());
    assert!(written.is_empty());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("::error::Unknown version strategy type: bogus"));
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("version-bump.toml"),
        "[defaults]\nversion_prefix = \"v\"\nmainline_versioning_branches = \"trunk\"\n",
    )
    .unwrap();

    let (output, written) = run_action(
        dir.path(),
        &[
            ("INPUT_LATEST_MAIN_VERSION", "0.4.1"),
            ("INPUT_BRANCH_NAME", "trunk"),
        ],
        &["--quiet"],
    );

    assert!(output.status.success());
    assert!(written.starts_with("new_version=v0.4.2\n"));
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let (output, _) = run_action(
        dir.path(),
        &[
            ("INPUT_LATEST_MAIN_VERSION", "v1.2.3"),
            ("INPUT_BRANCH_NAME", "main"),
            ("INPUT_VERSION_STRATEGY", "major"),
            ("INPUT_VERSION_PREFIX", "v"),
        ],
        &["--json", "--quiet"],
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["new_version"], "v2.0.0");
    assert_eq!(json["major"], "v2");
    assert_eq!(json["minor"], "v0");
    assert_eq!(json["patch"], "v0");
}

#[test]
fn test_stdout_sink_without_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .env_clear()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["--branch-name", "dev", "--latest-main-version", "2.0.0", "--quiet"])
        .output()
        .expect("Failed to execute version-bump");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "new_version=2.0.0-dev.1\nnew_version_raw=1\nprefix=2.0.0-dev\n"
    );
}

#[test]
fn test_json_without_output_file_is_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .env_clear()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["--branch-name", "dev", "--latest-main-version", "2.0.0", "--json"])
        .output()
        .expect("Failed to execute version-bump");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["new_version"], "2.0.0-dev.1");
    assert_eq!(json["major"], "branch-version-increased");
}

#[test]
fn test_boundary_warning_printed_once() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_version-bump"))
        .env_clear()
        .current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["--branch-name", "dev", "--latest-branch-version", "garbage"])
        .output()
        .expect("Failed to execute version-bump");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Cannot read counter").count(), 1);
}

#[test]
fn test_library_end_to_end() {
    let inputs = validate_inputs(PartialInputs {
        latest_main_version: Some("1.2.3".to_string()),
        branch_name: Some("main".to_string()),
        strategy: Some("minor".to_string()),
        version_prefix: Some("v".to_string()),
        mainline_versioning_branches: Some("main,master".to_string()),
        ..Default::default()
    });

    let outputs = update_version(&inputs).unwrap();
    assert_eq!(outputs.new_version, "v1.3.0");
    assert_eq!(outputs.new_version_raw, "1.3.0");
}

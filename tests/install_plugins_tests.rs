//! Integration tests for the install-plugins command
//!
//! Scenarios here never produce an installable plan, so the real npm is
//! never invoked; plan-producing paths are covered by unit tests against
//! the collector and filter.

mod common;

use assert_cmd::Command;
use common::TestWorkspace;
use predicates::prelude::*;

#[allow(deprecated)]
fn lintmatrix_cmd() -> Command {
    Command::cargo_bin("lintmatrix").unwrap()
}

#[test]
fn test_skip_command_exits_zero() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .args(["--command", "echo \"skip\""])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked skip"))
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_skip_wins_over_config_flag() {
    let ws = TestWorkspace::new();
    ws.write_file("cfg.json", r#"{"jsPlugins": ["eslint-plugin-foo"]}"#);
    lintmatrix_cmd()
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .args(["--command", "echo \"skip\" -c cfg.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_no_command_flag_and_no_env_is_noop() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .env_remove("LINTMATRIX_COMMAND")
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No command configured"))
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_empty_env_command_is_noop() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .env("LINTMATRIX_COMMAND", "")
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_env_command_is_honored() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .env("LINTMATRIX_COMMAND", "echo skip")
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("marked skip"));
}

#[test]
fn test_command_flag_overrides_env() {
    let ws = TestWorkspace::new();
    // The env command references a config that would produce a plan; the
    // flag's skip command must win.
    ws.write_file("cfg.json", r#"{"jsPlugins": ["eslint-plugin-foo"]}"#);
    lintmatrix_cmd()
        .env("LINTMATRIX_COMMAND", "oxlint -c cfg.json")
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .args(["--command", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_no_config_files_logs_nothing_to_install() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .args(["--command", "oxlint src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_missing_quoted_config_with_space_does_not_crash() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .args(["--command", r#"oxlint --config "my config.json""#])
        .assert()
        .success()
        .stderr(predicate::str::contains("my config.json"))
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_unparseable_config_is_nonfatal() {
    let ws = TestWorkspace::new();
    ws.write_file(".oxlintrc.json", "{ this is not json");
    lintmatrix_cmd()
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .args(["--command", "oxlint src"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot parse lint config"))
        .stdout(predicate::str::contains("No plugin packages to install."));
}

#[test]
fn test_path_specifiers_are_discarded_loudly() {
    let ws = TestWorkspace::new();
    // A config declaring only an absolute path: the path is discarded and,
    // being absolute rather than relative, contributes no runtime package.
    ws.write_file(".oxlintrc.json", r#"{"jsPlugins": ["/abs/plugin"]}"#);
    lintmatrix_cmd()
        .args(["install-plugins", "--dir"])
        .arg(&ws.path)
        .args(["--command", "oxlint src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("discarding"))
        .stdout(predicate::str::contains("/abs/plugin"))
        .stdout(predicate::str::contains("No plugin packages to install."));
}

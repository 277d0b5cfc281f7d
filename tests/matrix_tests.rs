//! Integration tests for matrix loading and the run command
//!
//! Entries used here are skipped or fail before any network or npm
//! activity, keeping the tests hermetic.

mod common;

use assert_cmd::Command;
use common::TestWorkspace;
use predicates::prelude::*;

#[allow(deprecated)]
fn lintmatrix_cmd() -> Command {
    Command::cargo_bin("lintmatrix").unwrap()
}

#[test]
fn test_run_missing_matrix_file_fails() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read matrix file"));
}

#[test]
fn test_run_malformed_matrix_fails() {
    let ws = TestWorkspace::new();
    ws.write_file("matrix.yaml", "entries: [unclosed");
    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse matrix file"));
}

#[test]
fn test_run_rejects_path_traversal_entry_names() {
    let ws = TestWorkspace::new();
    ws.write_matrix(
        "  - name: ../escape\n    repository: https://example.com/r.git\n    rev: abc\n    command: oxlint .\n",
    );
    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid entry name"));
}

#[test]
fn test_run_empty_matrix_is_noop() {
    let ws = TestWorkspace::new();
    ws.write_file("matrix.yaml", "entries: []\n");
    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("No matrix entries to run."));
}

#[test]
fn test_run_only_filter_without_match_is_noop() {
    let ws = TestWorkspace::new();
    ws.write_matrix(
        "  - name: repo\n    repository: https://example.com/r.git\n    rev: abc\n    command: oxlint .\n",
    );
    lintmatrix_cmd()
        .current_dir(&ws.path)
        .args(["run", "--only", "other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matrix entries to run."));
}

#[test]
fn test_run_skip_entry_passes() {
    let ws = TestWorkspace::new();
    ws.write_matrix(
        "  - name: repo\n    repository: https://example.com/r.git\n    rev: abc\n    command: echo \"skip\"\n",
    );
    ws.create_dir("matrix-repos/repo");

    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped: repo"))
        .stdout(predicate::str::contains("1 entries, 0 passed, 1 skipped, 0 failed"));
}

#[test]
fn test_run_missing_checkout_fails_entry_and_harness() {
    let ws = TestWorkspace::new();
    ws.write_matrix(
        "  - name: repo\n    repository: https://example.com/r.git\n    rev: abc\n    command: echo hi\n",
    );

    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no checkout"))
        .stderr(predicate::str::contains("1 of 1 matrix entries failed"));
}

#[test]
fn test_run_continues_past_failed_entries() {
    let ws = TestWorkspace::new();
    // First entry has no checkout and fails; the second is skipped and
    // must still be processed.
    ws.write_matrix(concat!(
        "  - name: broken\n    repository: https://example.com/a.git\n    rev: abc\n    command: echo hi\n",
        "  - name: fine\n    repository: https://example.com/b.git\n    rev: abc\n    command: skip\n",
    ));
    ws.create_dir("matrix-repos/fine");

    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("run")
        .assert()
        .failure()
        .stdout(predicate::str::contains("skipped: fine"))
        .stderr(predicate::str::contains("1 of 2 matrix entries failed"));
}

#[test]
fn test_clone_missing_matrix_file_fails() {
    let ws = TestWorkspace::new();
    lintmatrix_cmd()
        .current_dir(&ws.path)
        .arg("clone")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read matrix file"));
}

//! End-to-end CLI tests for the picstream binary.
//!
//! These exercise argument handling only; a real run needs a search backend,
//! which is out of reach for a hermetic test.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that invoking with no query fails with a usage error.
#[test]
fn test_binary_without_query_fails() {
    let mut cmd = Command::cargo_bin("picstream").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("picstream").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search the web for a topic"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("picstream").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("picstream"));
}

/// Test that invalid flags cause non-zero exit.
#[test]
fn test_binary_invalid_flag_returns_error() {
    let mut cmd = Command::cargo_bin("picstream").unwrap();
    cmd.arg("orchid")
        .arg("--invalid-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test that out-of-range site counts are rejected before any work happens.
#[test]
fn test_binary_rejects_out_of_range_max_sites() {
    let mut cmd = Command::cargo_bin("picstream").unwrap();
    cmd.args(["orchid", "--max-sites", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

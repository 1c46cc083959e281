//! # docsetup CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! Verifies top-level behavior of the `docsetup` binary: `--version`,
//! `--help`, the `help` subcommand, and argument errors.
//!

mod common;
use common::*;
use predicates::prelude::*;

/// `--version` prints the crate name and version.
#[test]
fn test_version_flag() {
    docsetup_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "docsetup {}",
            env!("CARGO_PKG_VERSION")
        )));
}

/// `--help` lists every command.
#[test]
fn test_help_flag() {
    docsetup_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docsetup"))
        .stdout(predicate::str::contains("full"))
        .stdout(predicate::str::contains("enhanced"))
        .stdout(predicate::str::contains("simple"))
        .stdout(predicate::str::contains("verify"));
}

/// `help <command>` shows the setup options.
#[test]
fn test_help_subcommand() {
    docsetup_cmd()
        .args(["help", "simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--templates"))
        .stdout(predicate::str::contains("--strict"));
}

/// Unknown commands are rejected by the argument parser.
#[test]
fn test_unknown_command_fails() {
    docsetup_cmd()
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

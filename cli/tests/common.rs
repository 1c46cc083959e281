//! # docsetup CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`main_tests.rs`, `setup.rs`,
//! `verify.rs`). Each `.rs` file in `cli/tests/` is compiled as its own test
//! crate and runs the compiled `docsetup` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// # Get docsetup Command (`docsetup_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `docsetup` binary.
///
/// Environment that would change where templates come from or which config
/// file is picked up is cleared, so runs only see what the test sets up.
///
/// ## Panics
/// Panics if the `docsetup` binary cannot be found via `Command::cargo_bin`.
pub fn docsetup_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("docsetup").expect("Failed to find docsetup binary for testing");
    cmd.env_remove("DOCSETUP_TEMPLATES_DIR")
        .env_remove("DOCSETUP_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Like `docsetup_cmd`, but running inside `dir` with the user config
/// directory pointed at an empty location below it.
pub fn docsetup_in(dir: &Path) -> Command {
    let mut cmd = docsetup_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg-config"))
        .env("HOME", dir);
    cmd
}

/// Writes `content` to `dir/rel`, creating parent directories.
pub fn write_file(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write test file");
}

/// Reads `dir/rel` to a string.
pub fn read_file(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).expect("Failed to read output file")
}

//! # docsetup Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! Filesystem helpers shared by the templating engine and the scaffolder.
//! Import from the submodule directly, e.g. `crate::common::fs::io::ensure_dir_exists`.
//!

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`,
/// `write_string_to_file`, `make_executable`).
pub mod io;

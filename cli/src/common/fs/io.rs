//! # docsetup Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` for the handful of operations the scaffold
//! needs, each adding path context to its errors:
//! - **`ensure_dir_exists`**: `mkdir -p`, tolerant of existing directories.
//!   Reports whether anything was created so callers can log it.
//! - **`read_file_to_string`**: Reads a template into memory.
//! - **`write_string_to_file`**: Creates the parent directories, then writes
//!   (overwriting) the file.
//! - **`make_executable`**: Marks a generated script as `0755` on Unix; a
//!   no-op elsewhere.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(Path::new("docs/claude/reference"))?;
//! io::write_string_to_file(Path::new("docs/claude/README.md"), "# Docs")?;
//! ```
//!
use crate::core::error::{DocsError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Returns `Ok(true)` if the directory was created and `Ok(false)` if it was
/// already there.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<bool> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
        Ok(true)
    } else if !path.is_dir() {
        anyhow::bail!(DocsError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
        Ok(false)
    }
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// The parent directory is created first if necessary.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        // `Path::new("file.md").parent()` is `Some("")`; nothing to create there.
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Sets `rwxr-xr-x` on a generated script.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to mark {:?} as executable", path))
}

#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> Result<()> {
    debug!("Skipping executable bit on non-Unix platform for {:?}", path);
    Ok(())
}

//! # docsetup Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! This module defines the error types used throughout docsetup. Only a few
//! things can actually go wrong during a setup run, and most of them are not
//! errors at all: a missing template or a leftover placeholder is reported as
//! a warning and the run carries on. The variants here cover the cases that
//! do stop a run.
//!
//! ## Architecture
//!
//! - `DocsError`: A custom error enum using `thiserror` for the fatal cases
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so callers can attach context
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if path.is_file() {
//!     anyhow::bail!(DocsError::FileSystem(format!("Not a directory: {}", path.display())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read template: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the docsetup application.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// Standard input reached end-of-file while a prompt was waiting for an answer.
    #[error("Input closed while waiting for an answer to '{prompt}'")]
    InputClosed { prompt: String },

    /// Strict rendering found placeholders with no value.
    #[error("Unresolved placeholders in '{}': {}", path.display(), tokens.join(", "))]
    UnresolvedPlaceholders { path: PathBuf, tokens: Vec<String> },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

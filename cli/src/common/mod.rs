//! # docsetup Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! Shared building blocks used by the command handlers and the core modules.
//! Nothing here knows about profiles or templates; those live in
//! `commands::setup`.
//!
//! ```rust
//! use crate::common::{clock::SystemClock, fs::io, ui::prompt::LinePrompter};
//! ```
//!

/// Date source for derived values (`Clock`, `SystemClock`, `FixedClock`).
pub mod clock;
/// Utilities for filesystem operations (I/O).
pub mod fs;
/// Terminal interaction: prompts and progress reporting.
pub mod ui;

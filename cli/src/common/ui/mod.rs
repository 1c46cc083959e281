//! # docsetup UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! Terminal interaction for the setup pipeline, split by direction:
//!
//! - **`prompt`**: Questions in, answers out. The `Prompter` trait and its
//!   line-based implementation, plus the `[y/n]` confirmation helper.
//! - **`report`**: Progress out. `ScaffoldEvent`s and the `Reporter` trait
//!   that renders them (or records them, in tests).
//!
//! Keeping both behind traits lets the pipeline run against in-memory
//! input and a recorded event list.
//!

pub mod prompt;
pub mod report;

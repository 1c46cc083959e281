//! # docsetup Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! This module aggregates the command groups that make up the docsetup CLI
//! and exposes them to the entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `setup`: The interactive scaffolding pipeline behind `full`, `enhanced` and `simple`
//! - `verify`: Checks a project against the layout the enhanced scaffold creates
//!
//! Each group defines its own arguments structure and handler function.
//!

/// Interactive documentation setup (`full`, `enhanced`, `simple`).
pub mod setup;
/// Project structure verification (`verify`).
pub mod verify;

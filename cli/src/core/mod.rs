//! # docsetup Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components used by the
//! command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `project_info`: The ordered key/value mapping collected during a run
//! - `templating`: `{{KEY}}` placeholder substitution
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{DocsError, Result}; // For error handling
//! use crate::core::templating; // For rendering templates
//! ```
//!
pub mod config;
pub mod error;
pub mod project_info;
pub mod templating;

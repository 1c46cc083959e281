//! # docsetup Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! This module loads the optional configuration that tells docsetup where to
//! find templates, where to write the generated scaffold, and whether to
//! render strictly. Every setting has a default, so running without any
//! configuration file behaves exactly like running from the project root.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the command handler, not here)
//! 2. Project-specific `.docsetup.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/docsetup/config.toml`
//! 4. Default values defined in the code
//!
//! The upward search for `.docsetup.toml` stops at the first directory that
//! contains a `.git` directory. Relative paths in `.docsetup.toml` are taken
//! relative to the directory holding it, so running from a subdirectory still
//! targets the project root. Paths are tilde-expanded after merging and
//! validated before use.
//!
//! ## Examples
//!
//! ```toml
//! [paths]
//! templates_dir = "~/shared/doc-templates"
//! output_dir = "."
//!
//! [render]
//! strict = true
//! ```
//!
use crate::core::error::{DocsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Where templates are read from and where the scaffold is written.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Root that template source paths (`claude/...`, `templates/...`) are resolved against.
    #[serde(default = "default_root")]
    pub templates_dir: String,
    /// Root under which rendered documents, directories and artifacts are created.
    #[serde(default = "default_root")]
    pub output_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_root(),
            output_dir: default_root(),
        }
    }
}

/// Rendering behaviour.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Fail on placeholders with no value instead of leaving them in place.
    #[serde(default)]
    pub strict: bool,
}

fn default_root() -> String {
    ".".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".docsetup.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?.map(|(mut config, project_root)| {
        anchor_project_paths(&mut config, &project_root);
        config
    });
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "DocSetup", "docsetup") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

/// Loads `.docsetup.toml`, returning it with the directory that holds it.
fn load_project_config() -> Result<Option<(Config, PathBuf)>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            let config = load_config_from_path(&path)?;
            let project_root = path.parent().map(Path::to_path_buf).unwrap_or(current_dir);
            Ok(Some((config, project_root)))
        }
        None => {
            debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found.");
            Ok(None)
        }
    }
}

/// Walks from `start` towards the filesystem root looking for `.docsetup.toml`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(PROJECT_CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                dir.display()
            );
            return None;
        }
    }
    None
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        paths: PathsConfig {
            templates_dir: if project.paths.templates_dir != default_root() {
                project.paths.templates_dir
            } else {
                user.paths.templates_dir
            },
            output_dir: if project.paths.output_dir != default_root() {
                project.paths.output_dir
            } else {
                user.paths.output_dir
            },
        },
        render: RenderConfig {
            strict: project.render.strict || user.render.strict,
        },
    }
}

/// Relative paths set in a project file are relative to that file's directory.
/// Unset paths keep the default so the user config can still fill them.
fn anchor_project_paths(config: &mut Config, project_root: &Path) {
    for value in [&mut config.paths.templates_dir, &mut config.paths.output_dir] {
        if *value == default_root() {
            continue;
        }
        let expanded = shellexpand::tilde(value.as_str()).into_owned();
        let path = Path::new(&expanded);
        *value = if path.is_relative() {
            project_root.join(path).to_string_lossy().into_owned()
        } else {
            expanded
        };
    }
    debug!(
        "Project paths anchored at {}: templates_dir={}, output_dir={}",
        project_root.display(),
        config.paths.templates_dir,
        config.paths.output_dir
    );
}

fn expand_config_paths(config: &mut Config) {
    config.paths.templates_dir = shellexpand::tilde(&config.paths.templates_dir).into_owned();
    config.paths.output_dir = shellexpand::tilde(&config.paths.output_dir).into_owned();
    debug!(
        "Expanded paths: templates_dir={}, output_dir={}",
        config.paths.templates_dir, config.paths.output_dir
    );
}

fn validate_config(config: &Config) -> Result<()> {
    for (name, value) in [
        ("templates_dir", &config.paths.templates_dir),
        ("output_dir", &config.paths.output_dir),
    ] {
        if value.is_empty() {
            return Err(anyhow!(DocsError::Config(format!(
                "'{name}' cannot be empty."
            ))));
        }
        let path = Path::new(value);
        if path.exists() && !path.is_dir() {
            return Err(anyhow!(DocsError::Config(format!(
                "Configured {name} '{}' exists but is not a directory.",
                path.display()
            ))));
        }
    }
    Ok(())
}

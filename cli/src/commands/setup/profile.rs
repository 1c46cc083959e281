//! # Setup Profiles
//!
//! File: cli/src/commands/setup/profile.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! A `Profile` selects which questions are asked and which files and
//! directories the scaffold contains. Everything else in the pipeline is
//! shared.
//!
//! | Profile    | Questions        | Confirm | Validate | Extra artifacts                       |
//! |------------|------------------|---------|----------|---------------------------------------|
//! | `Full`     | all              | no      | no       | none                                  |
//! | `Enhanced` | essential + menu | yes     | yes      | verify script, startup instructions   |
//! | `Simple`   | essential        | yes     | no       | update-details reminder               |
//!
use crate::core::project_info::ProjectInfo;
use std::fmt;
use std::path::PathBuf;

/// Where the collected project info is persisted, relative to the output root.
pub const CONFIG_PATH: &str = "docs/claude/.config.json";

/// Key holding the slugified project name (enhanced profile only).
pub const PROJECT_SLUG_KEY: &str = "project-name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Full,
    Enhanced,
    Simple,
}

/// One template to render: `source` is relative to the template root,
/// `target` to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMapping {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl TemplateMapping {
    fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Templates shared by the full and simple profiles, rooted at `claude/`.
const CLAUDE_TEMPLATES: &[(&str, &str)] = &[
    ("claude/ALWAYS_LOAD.template.md", "docs/claude/ALWAYS_LOAD.md"),
    ("claude/current-sprint.template.md", "docs/claude/current-sprint.md"),
    ("claude/session-handoff.template.md", "docs/claude/session-handoff.md"),
    ("claude/README.template.md", "docs/claude/README.md"),
    (
        "claude/bestpractices/quick-reference.template.md",
        "docs/claude/bestpractices/quick-reference.md",
    ),
];

const DOCS_DIRECTORIES: &[&str] = &["docs/claude/reference", "docs/claude/completed"];

const PROJECT_DIRECTORIES: &[&str] = &[
    "src/controllers",
    "src/pipelines",
    "src/utils",
    "scripts",
    "tests/unit",
    "tests/integration",
    "experiments/sandbox",
    "docs/claude/reference",
    "docs/claude/completed",
];

impl Profile {
    /// Whether the operator must confirm a summary before anything is written.
    pub fn asks_confirmation(self) -> bool {
        !matches!(self, Profile::Full)
    }

    /// Whether rendered files are checked for leftover placeholder markers.
    pub fn validates_output(self) -> bool {
        matches!(self, Profile::Enhanced)
    }

    /// Templates to render, in order. The enhanced best-practices document is
    /// named after the project, so the mapping depends on `info`.
    pub fn template_mappings(self, info: &ProjectInfo) -> Vec<TemplateMapping> {
        match self {
            Profile::Full | Profile::Simple => CLAUDE_TEMPLATES
                .iter()
                .map(|(source, target)| TemplateMapping::new(*source, *target))
                .collect(),
            Profile::Enhanced => vec![
                TemplateMapping::new(
                    "templates/ALWAYS_LOAD.template.md",
                    "docs/claude/ALWAYS_LOAD.md",
                ),
                TemplateMapping::new(
                    "templates/current-sprint.template.md",
                    "docs/claude/current-sprint.md",
                ),
                TemplateMapping::new(
                    "templates/session-handoff.template.md",
                    "docs/claude/session-handoff.md",
                ),
                TemplateMapping::new("templates/README.template.md", "docs/claude/README.md"),
                TemplateMapping::new(
                    "templates/bestpractices.template.md",
                    best_practices_path(info),
                ),
                TemplateMapping::new(
                    "templates/quick-reference.template.md",
                    "docs/claude/bestpractices/quick-reference.md",
                ),
            ],
        }
    }

    /// Directories created (idempotently) under the output root.
    pub fn directories(self) -> &'static [&'static str] {
        match self {
            Profile::Full | Profile::Simple => DOCS_DIRECTORIES,
            Profile::Enhanced => PROJECT_DIRECTORIES,
        }
    }
}

/// `docs/<project-name>-bestpractices.md`.
pub fn best_practices_path(info: &ProjectInfo) -> String {
    format!("docs/{}-bestpractices.md", info.value(PROJECT_SLUG_KEY))
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Full => "full",
            Profile::Enhanced => "enhanced",
            Profile::Simple => "simple",
        };
        f.write_str(name)
    }
}

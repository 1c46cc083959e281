//! # docsetup Verify Command
//!
//! File: cli/src/commands/verify.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! `docsetup verify` checks that a project still follows the layout the
//! enhanced scaffold establishes:
//! - the top-level directories `src/`, `scripts/`, `experiments/`, `tests/`
//!   and `docs/claude/` exist;
//! - no Python file in `scripts/` looks like production code (its name
//!   mentions `controller`, `pipeline` or `system`);
//! - no Python file other than `setup.py` sits in the project root.
//!
//! The enhanced setup also writes `scripts/verify_structure.sh`, a standalone
//! shell version of the same checks for machines without docsetup.
//!
//! ## Usage
//!
//! ```bash
//! docsetup verify              # check the current directory
//! docsetup verify --root ../app
//! ```
//!
//! Exits with status 1 when issues are found.
//!
use crate::core::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Directories every scaffolded project is expected to keep.
pub const REQUIRED_DIRS: &[&str] = &["src/", "scripts/", "experiments/", "tests/", "docs/claude/"];

/// Name fragments that suggest a script is really production code.
const PRODUCTION_MARKERS: &[&str] = &["controller", "pipeline", "system"];

/// Python files allowed in the project root.
const ALLOWED_ROOT_SCRIPTS: &[&str] = &["setup.py"];

/// Standalone shell version of `verify_project_structure`, written by the enhanced setup.
pub const VERIFY_SCRIPT: &str = r#"#!/bin/sh
# Verify the project follows the documented structure.
# Generated by docsetup; `docsetup verify` performs the same checks.

issues=""
add_issue() {
    issues="${issues}   - $1
"
}

for dir in src/ scripts/ experiments/ tests/ docs/claude/; do
    [ -d "$dir" ] || add_issue "Missing required directory: $dir"
done

if [ -d scripts ]; then
    for path in scripts/*.py; do
        [ -f "$path" ] || continue
        file=$(basename "$path")
        case "$file" in
            *controller*|*pipeline*|*system*)
                add_issue "Possible production code in scripts/: $file"
                ;;
        esac
    done
fi

for path in ./*.py; do
    [ -f "$path" ] || continue
    file=$(basename "$path")
    [ "$file" = "setup.py" ] || add_issue "Python file in root directory: $file"
done

if [ -n "$issues" ]; then
    echo "❌ Structure Issues Found:"
    printf '%s' "$issues"
    exit 1
fi

echo "✅ Project structure looks good!"
"#;

/// Arguments for the `verify` command.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Project root to check (defaults to the current directory).
    #[arg(long, short = 'r')]
    root: Option<PathBuf>,
}

/// Issues found by `verify_project_structure`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub issues: Vec<String>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn handle_verify(args: VerifyArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    info!("Verifying project structure under {}", root.display());

    let report = verify_project_structure(&root);
    if report.is_ok() {
        println!("✅ Project structure looks good!");
        return Ok(());
    }

    println!("❌ Structure Issues Found:");
    for issue in &report.issues {
        println!("   - {issue}");
    }
    anyhow::bail!("{} structure issue(s) found", report.issues.len())
}

/// Runs every structure check against `root`.
pub fn verify_project_structure(root: &Path) -> VerifyReport {
    let mut issues = Vec::new();

    for dir in REQUIRED_DIRS {
        if !root.join(dir).is_dir() {
            issues.push(format!("Missing required directory: {dir}"));
        }
    }

    for file in python_files(&root.join("scripts")) {
        if PRODUCTION_MARKERS.iter().any(|marker| file.contains(marker)) {
            issues.push(format!("Possible production code in scripts/: {file}"));
        }
    }

    for file in python_files(root) {
        if !ALLOWED_ROOT_SCRIPTS.contains(&file.as_str()) {
            issues.push(format!("Python file in root directory: {file}"));
        }
    }

    debug!("Structure verification found {} issue(s)", issues.len());
    VerifyReport { issues }
}

/// Names of `.py` files directly inside `dir`, sorted. A missing directory has none.
fn python_files(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.ends_with(".py"))
        .collect()
}

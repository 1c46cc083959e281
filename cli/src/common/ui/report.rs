//! # docsetup Progress Reporting
//!
//! File: cli/src/common/ui/report.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! The setup pipeline never prints directly. Each step emits a
//! `ScaffoldEvent` to a `Reporter`:
//! - `ConsoleReporter` turns events into the familiar `✅ Created: ...` lines
//!   on stdout, with paths shown relative to the working directory.
//! - `Vec<ScaffoldEvent>` implements `Reporter` too, which is how tests
//!   observe exactly what the pipeline did.
//!
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Generated files that are not rendered from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    VerifyScript,
    StartupInstructions,
    UpdateDetails,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::VerifyScript => "verification script",
            ArtifactKind::StartupInstructions => "startup instructions",
            ArtifactKind::UpdateDetails => "update reminder",
        };
        f.write_str(label)
    }
}

/// One observable step of a setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    TemplateRendered { target: PathBuf },
    TemplateMissing { source: PathBuf },
    DirectoryEnsured { path: PathBuf, created: bool },
    ConfigSaved { path: PathBuf },
    ArtifactWritten { kind: ArtifactKind, path: PathBuf },
    /// A rendered file still contains `{{` or `[[`.
    ValidationWarning { path: PathBuf },
    ValidationPassed,
}

/// Receives events from the pipeline.
pub trait Reporter {
    fn report(&mut self, event: ScaffoldEvent);
}

impl Reporter for Vec<ScaffoldEvent> {
    fn report(&mut self, event: ScaffoldEvent) {
        self.push(event);
    }
}

/// Prints events for a human at the terminal.
pub struct ConsoleReporter {
    base: Option<PathBuf>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            base: std::env::current_dir().ok(),
        }
    }

    fn show(&self, path: &Path) -> String {
        self.base
            .as_deref()
            .and_then(|base| pathdiff::diff_paths(path, base))
            .unwrap_or_else(|| path.to_path_buf())
            .display()
            .to_string()
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: ScaffoldEvent) {
        debug!("Scaffold event: {:?}", event);
        match &event {
            ScaffoldEvent::TemplateRendered { target } => {
                println!("✅ Created: {}", self.show(target));
            }
            ScaffoldEvent::TemplateMissing { source } => {
                println!("⚠️  Template not found: {}", self.show(source));
            }
            ScaffoldEvent::DirectoryEnsured { path, created: true } => {
                println!("✅ Created directory: {}", self.show(path));
            }
            ScaffoldEvent::DirectoryEnsured {
                path,
                created: false,
            } => {
                println!("✅ Directory already present: {}", self.show(path));
            }
            ScaffoldEvent::ConfigSaved { path } => {
                println!("✅ Saved configuration: {}", self.show(path));
            }
            ScaffoldEvent::ArtifactWritten { kind, path } => {
                println!("✅ Created {}: {}", kind, self.show(path));
            }
            ScaffoldEvent::ValidationWarning { path } => {
                println!(
                    "⚠️  Warning: {} may contain unprocessed placeholders",
                    self.show(path)
                );
            }
            ScaffoldEvent::ValidationPassed => {
                println!("✅ All files processed successfully!");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_reporter_records_in_order() {
        let mut events: Vec<ScaffoldEvent> = Vec::new();
        events.report(ScaffoldEvent::ValidationPassed);
        events.report(ScaffoldEvent::ConfigSaved {
            path: PathBuf::from("docs/claude/.config.json"),
        });
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], ScaffoldEvent::ValidationPassed);
    }

    #[test]
    fn test_console_reporter_shows_relative_paths() {
        let reporter = ConsoleReporter {
            base: Some(PathBuf::from("/work/project")),
        };
        assert_eq!(
            reporter.show(Path::new("/work/project/docs/claude/README.md")),
            "docs/claude/README.md"
        );
        let detached = ConsoleReporter { base: None };
        assert_eq!(detached.show(Path::new("/x/y.md")), "/x/y.md");
    }

    #[test]
    fn test_artifact_kind_labels() {
        assert_eq!(ArtifactKind::VerifyScript.to_string(), "verification script");
        assert_eq!(ArtifactKind::UpdateDetails.to_string(), "update reminder");
    }
}

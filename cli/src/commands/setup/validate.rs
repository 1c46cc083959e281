//! # Rendered Output Validator
//!
//! File: cli/src/commands/setup/validate.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! Advisory check run by the enhanced profile after rendering: any rendered
//! file that still contains `{{` or `[[` gets a warning. The run continues
//! either way.
//!
use crate::common::fs::io;
use crate::common::ui::report::{Reporter, ScaffoldEvent};
use crate::core::error::Result;
use std::path::{Path, PathBuf};

const MARKERS: &[&str] = &["{{", "[["];

/// Whether `text` still contains a placeholder marker.
pub fn has_unprocessed_markers(text: &str) -> bool {
    MARKERS.iter().any(|marker| text.contains(marker))
}

/// Checks each rendered file and returns those that still contain markers.
pub fn check_rendered(files: &[PathBuf], reporter: &mut dyn Reporter) -> Result<Vec<PathBuf>> {
    let mut flagged = Vec::new();
    for path in files {
        if file_has_markers(path)? {
            reporter.report(ScaffoldEvent::ValidationWarning { path: path.clone() });
            flagged.push(path.clone());
        }
    }
    if flagged.is_empty() {
        reporter.report(ScaffoldEvent::ValidationPassed);
    }
    Ok(flagged)
}

fn file_has_markers(path: &Path) -> Result<bool> {
    Ok(has_unprocessed_markers(&io::read_file_to_string(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_markers_detected() {
        assert!(has_unprocessed_markers("left {{OVER}}"));
        assert!(has_unprocessed_markers("fill in [[later]]"));
        assert!(has_unprocessed_markers("half {{ open"));
        assert!(!has_unprocessed_markers("clean { text } [x]"));
    }

    #[test]
    fn test_check_rendered_flags_only_dirty_files() -> Result<()> {
        let dir = tempdir()?;
        let clean = dir.path().join("clean.md");
        let dirty = dir.path().join("dirty.md");
        fs::write(&clean, "# Done")?;
        fs::write(&dirty, "# {{TODO}}")?;

        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let flagged = check_rendered(&[clean, dirty.clone()], &mut events)?;
        assert_eq!(flagged, vec![dirty.clone()]);
        assert_eq!(events, vec![ScaffoldEvent::ValidationWarning { path: dirty }]);
        Ok(())
    }

    #[test]
    fn test_check_rendered_all_clean_reports_pass() -> Result<()> {
        let dir = tempdir()?;
        let clean = dir.path().join("clean.md");
        fs::write(&clean, "# Done")?;
        let mut events: Vec<ScaffoldEvent> = Vec::new();
        assert!(check_rendered(&[clean], &mut events)?.is_empty());
        assert_eq!(events, vec![ScaffoldEvent::ValidationPassed]);
        Ok(())
    }
}

//! # Scaffolder
//!
//! File: cli/src/commands/setup/scaffold.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! Creates the profile's directories and writes the files that are generated
//! rather than rendered from templates. Every operation here is idempotent:
//! directories that exist are left alone and files are overwritten with the
//! same content on a rerun.
//!
use super::profile::{best_practices_path, Profile, CONFIG_PATH};
use crate::commands::verify::VERIFY_SCRIPT;
use crate::common::fs::io;
use crate::common::ui::report::{ArtifactKind, Reporter, ScaffoldEvent};
use crate::core::error::Result;
use crate::core::project_info::ProjectInfo;
use std::path::{Path, PathBuf};

pub const VERIFY_SCRIPT_PATH: &str = "scripts/verify_structure.sh";
pub const STARTUP_INSTRUCTIONS_PATH: &str = "docs/claude/STARTUP_INSTRUCTIONS.md";
pub const UPDATE_DETAILS_PATH: &str = "docs/claude/UPDATE_DETAILS.md";

/// Creates every directory of the profile under `root`.
pub fn create_directories(
    profile: Profile,
    root: &Path,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    for dir in profile.directories() {
        let path = root.join(dir);
        let created = io::ensure_dir_exists(&path)?;
        reporter.report(ScaffoldEvent::DirectoryEnsured { path, created });
    }
    Ok(())
}

/// Persists the collected values as pretty-printed JSON.
pub fn save_config(
    info: &ProjectInfo,
    root: &Path,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let path = root.join(CONFIG_PATH);
    io::write_string_to_file(&path, &info.to_json_pretty()?)?;
    reporter.report(ScaffoldEvent::ConfigSaved { path: path.clone() });
    Ok(path)
}

pub fn write_verify_script(root: &Path, reporter: &mut dyn Reporter) -> Result<PathBuf> {
    let path = root.join(VERIFY_SCRIPT_PATH);
    io::write_string_to_file(&path, VERIFY_SCRIPT)?;
    io::make_executable(&path)?;
    reporter.report(ScaffoldEvent::ArtifactWritten {
        kind: ArtifactKind::VerifyScript,
        path: path.clone(),
    });
    Ok(path)
}

/// Files a new session should read first, in order.
pub fn startup_reading_order(info: &ProjectInfo) -> [String; 3] {
    [
        "docs/claude/ALWAYS_LOAD.md".to_string(),
        best_practices_path(info),
        "docs/claude/current-sprint.md".to_string(),
    ]
}

pub fn write_startup_instructions(
    info: &ProjectInfo,
    root: &Path,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let reading_list: String = startup_reading_order(info)
        .iter()
        .enumerate()
        .map(|(i, file)| format!("{}. {}\n", i + 1, file))
        .collect();
    let content = format!(
        "# Claude Session Startup Instructions\n\
         \n\
         Always start your Claude sessions with this prompt:\n\
         \n\
         ```\n\
         Please read:\n\
         {reading_list}\
         ```\n\
         \n\
         This ensures Claude has all the necessary context for your project.\n"
    );

    let path = root.join(STARTUP_INSTRUCTIONS_PATH);
    io::write_string_to_file(&path, &content)?;
    reporter.report(ScaffoldEvent::ArtifactWritten {
        kind: ArtifactKind::StartupInstructions,
        path: path.clone(),
    });
    Ok(path)
}

pub fn write_update_details(
    info: &ProjectInfo,
    root: &Path,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let content = format!(
        "# Project Details to Update\n\
         \n\
         As you work on {project}, update these placeholders in the documentation:\n\
         \n\
         ## In ALWAYS_LOAD.md:\n\
         - **Primary Identifiers**: Currently \"TBD\" - update when you identify \
         the main IDs (BSS, SKU, etc.)\n\
         \n\
         ## In current-sprint.md:\n\
         - **Working On - File**: Currently points to a default script name\n\
         - **Output**: Currently \"TBD\" - update with actual output location\n\
         - **Test Case**: Currently \"TBD\" - add actual test identifiers\n\
         \n\
         ## Optional Updates:\n\
         - **Team Name**: Currently generic - update if needed\n\
         - **BigQuery Settings**: Currently uses defaults - update when you set up tables\n\
         \n\
         These can be updated naturally as the project develops!\n",
        project = info.value("PROJECT_NAME")
    );

    let path = root.join(UPDATE_DETAILS_PATH);
    io::write_string_to_file(&path, &content)?;
    reporter.report(ScaffoldEvent::ArtifactWritten {
        kind: ArtifactKind::UpdateDetails,
        path: path.clone(),
    });
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::setup::profile::PROJECT_SLUG_KEY;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_create_directories_is_idempotent() -> Result<()> {
        let root = tempdir()?;
        let mut events: Vec<ScaffoldEvent> = Vec::new();
        create_directories(Profile::Simple, root.path(), &mut events)?;
        create_directories(Profile::Simple, root.path(), &mut events)?;

        assert!(root.path().join("docs/claude/reference").is_dir());
        assert!(root.path().join("docs/claude/completed").is_dir());
        let created: Vec<bool> = events
            .iter()
            .map(|e| match e {
                ScaffoldEvent::DirectoryEnsured { created, .. } => *created,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(created, vec![true, true, false, false]);
        Ok(())
    }

    #[test]
    fn test_save_config_writes_json() -> Result<()> {
        let root = tempdir()?;
        let info: ProjectInfo = [("PROJECT_NAME", "Foo")].into_iter().collect();
        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let path = save_config(&info, root.path(), &mut events)?;
        assert_eq!(path, root.path().join(CONFIG_PATH));
        assert_eq!(
            fs::read_to_string(&path)?,
            "{\n  \"PROJECT_NAME\": \"Foo\"\n}"
        );
        assert_eq!(events, vec![ScaffoldEvent::ConfigSaved { path }]);
        Ok(())
    }

    #[test]
    fn test_startup_instructions_list_files_in_order() -> Result<()> {
        let root = tempdir()?;
        let info: ProjectInfo = [(PROJECT_SLUG_KEY, "my-app")].into_iter().collect();
        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let path = write_startup_instructions(&info, root.path(), &mut events)?;
        let content = fs::read_to_string(path)?;
        assert!(content.contains(
            "Please read:\n\
             1. docs/claude/ALWAYS_LOAD.md\n\
             2. docs/my-app-bestpractices.md\n\
             3. docs/claude/current-sprint.md\n```"
        ));
        Ok(())
    }

    #[test]
    fn test_update_details_mentions_project() -> Result<()> {
        let root = tempdir()?;
        let info: ProjectInfo = [("PROJECT_NAME", "Foo")].into_iter().collect();
        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let path = write_update_details(&info, root.path(), &mut events)?;
        let content = fs::read_to_string(path)?;
        assert!(content.starts_with("# Project Details to Update\n\nAs you work on Foo,"));
        Ok(())
    }

    #[test]
    fn test_verify_script_written() -> Result<()> {
        let root = tempdir()?;
        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let path = write_verify_script(root.path(), &mut events)?;
        assert_eq!(fs::read_to_string(&path)?, VERIFY_SCRIPT);
        assert!(matches!(
            events.as_slice(),
            [ScaffoldEvent::ArtifactWritten {
                kind: ArtifactKind::VerifyScript,
                ..
            }]
        ));
        Ok(())
    }
}

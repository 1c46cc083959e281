//! # Setup Pipeline
//!
//! File: cli/src/commands/setup/pipeline.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! Runs one setup from first question to last file:
//!
//! ```text
//! START → COLLECTING → [CONFIRMING] → RENDERING → SCAFFOLDING → DONE
//!                           └──────→ ABORTED
//! ```
//!
//! Nothing touches the filesystem before confirmation, so an abort leaves no
//! trace. After that, each step either succeeds, is skipped with a warning
//! (missing template, leftover placeholders), or fails the run with an
//! error (I/O failure, strict-mode placeholders). There is no rollback;
//! rerunning with the same answers produces the same files.
//!
//! The prompter, clock and reporter are all passed in, so the pipeline runs
//! unchanged against stdin/stdout or against in-memory fakes.
//!
use super::collect;
use super::profile::Profile;
use super::scaffold;
use super::validate;
use crate::common::clock::Clock;
use crate::common::ui::prompt::Prompter;
use crate::common::ui::report::{Reporter, ScaffoldEvent};
use crate::core::error::Result;
use crate::core::project_info::ProjectInfo;
use crate::core::templating::{self, RenderPolicy, TemplateOutcome};
use std::path::PathBuf;
use tracing::{debug, info};

/// Resolved locations and policy for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub templates_dir: PathBuf,
    pub output_dir: PathBuf,
    pub policy: RenderPolicy,
}

/// Everything a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub info: ProjectInfo,
    pub rendered: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    pub config_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Completion),
    Aborted,
}

pub fn run(
    profile: Profile,
    settings: &Settings,
    prompter: &mut dyn Prompter,
    clock: &dyn Clock,
    reporter: &mut dyn Reporter,
) -> Result<Outcome> {
    info!("Starting {} setup", profile);
    let info = collect::collect(profile, prompter, clock)?;

    if profile.asks_confirmation() && !collect::confirm_setup(profile, &info, prompter)? {
        info!("Setup declined by operator");
        return Ok(Outcome::Aborted);
    }

    prompter.say("\n📁 Setting up documentation structure...")?;

    let mut rendered = Vec::new();
    let mut missing = Vec::new();
    for mapping in profile.template_mappings(&info) {
        let source = settings.templates_dir.join(&mapping.source);
        let target = settings.output_dir.join(&mapping.target);
        match templating::render_file(&source, &target, &info, settings.policy)? {
            TemplateOutcome::Written {
                target,
                replacements,
                unresolved,
            } => {
                debug!("{} placeholder(s) filled in {}", replacements, target.display());
                if !unresolved.is_empty() {
                    debug!(
                        "{} left unresolved in {}",
                        unresolved.join(", "),
                        target.display()
                    );
                }
                reporter.report(ScaffoldEvent::TemplateRendered {
                    target: target.clone(),
                });
                rendered.push(target);
            }
            TemplateOutcome::Missing { source } => {
                reporter.report(ScaffoldEvent::TemplateMissing {
                    source: source.clone(),
                });
                missing.push(source);
            }
        }
    }

    scaffold::create_directories(profile, &settings.output_dir, reporter)?;
    let config_path = scaffold::save_config(&info, &settings.output_dir, reporter)?;

    if profile == Profile::Enhanced {
        scaffold::write_verify_script(&settings.output_dir, reporter)?;
    }
    if profile.validates_output() {
        prompter.say("\n🔍 Validating setup...")?;
        let flagged = validate::check_rendered(&rendered, reporter)?;
        if !flagged.is_empty() {
            debug!("{} rendered file(s) may contain placeholders", flagged.len());
        }
    }

    match profile {
        Profile::Enhanced => {
            scaffold::write_startup_instructions(&info, &settings.output_dir, reporter)?;
        }
        Profile::Simple => {
            scaffold::write_update_details(&info, &settings.output_dir, reporter)?;
        }
        Profile::Full => {}
    }

    info!(
        "{} setup finished: {} rendered, {} missing",
        profile,
        rendered.len(),
        missing.len()
    );
    Ok(Outcome::Completed(Completion {
        info,
        rendered,
        missing,
        config_path,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::setup::profile::CONFIG_PATH;
    use crate::commands::setup::scaffold::{
        STARTUP_INSTRUCTIONS_PATH, UPDATE_DETAILS_PATH, VERIFY_SCRIPT_PATH,
    };
    use crate::common::clock::FixedClock;
    use crate::common::ui::prompt::LinePrompter;
    use crate::common::ui::report::ArtifactKind;
    use chrono::NaiveDate;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const FULL_INPUT: &str = "Foo\nkw-class\nKW Class\nBSS-1-2\nJuly\nTuning\n\
                              scripts/a.py\nout\nBSS-9\n\npp\nD\n";

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 7, 16).unwrap())
    }

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn settings(dir: &TempDir, policy: RenderPolicy) -> Settings {
        Settings {
            templates_dir: dir.path().join("tpl"),
            output_dir: dir.path().join("out"),
            policy,
        }
    }

    fn write_template(settings: &Settings, rel: &str, content: &str) {
        let path = settings.templates_dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn write_claude_templates(settings: &Settings) {
        write_template(
            settings,
            "claude/ALWAYS_LOAD.template.md",
            "# {{PROJECT_NAME}}\nTable: {{OUTPUT_TABLE}}\n",
        );
        write_template(settings, "claude/current-sprint.template.md", "Dates: {{SPRINT_DATES}}\n");
        write_template(
            settings,
            "claude/session-handoff.template.md",
            "Focus: {{CURRENT_FOCUS_DESCRIPTION}}\n",
        );
        write_template(settings, "claude/README.template.md", "Team {{TEAM_NAME}} {{UNKNOWN}}\n");
        write_template(
            settings,
            "claude/bestpractices/quick-reference.template.md",
            "Run {{SCRIPT_EXAMPLE}}\n",
        );
    }

    fn read(root: &Path, rel: &str) -> String {
        fs::read_to_string(root.join(rel)).unwrap()
    }

    #[test]
    fn test_full_run_renders_and_scaffolds() -> Result<()> {
        let dir = tempdir()?;
        let settings = settings(&dir, RenderPolicy::Lenient);
        write_claude_templates(&settings);

        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let mut answers = prompter(FULL_INPUT);
        let outcome = run(Profile::Full, &settings, &mut answers, &clock(), &mut events)?;
        let Outcome::Completed(done) = outcome else {
            panic!("full profile never aborts");
        };

        let out = &settings.output_dir;
        assert_eq!(done.rendered.len(), 5);
        assert!(done.missing.is_empty());
        assert_eq!(read(out, "docs/claude/ALWAYS_LOAD.md"), "# Foo\nTable: D.pp_kw_class\n");
        assert_eq!(read(out, "docs/claude/README.md"), "Team Development Team {{UNKNOWN}}\n");
        assert_eq!(
            read(out, "docs/claude/bestpractices/quick-reference.md"),
            "Run run_kw_class.py\n"
        );
        assert!(out.join("docs/claude/reference").is_dir());
        assert!(out.join("docs/claude/completed").is_dir());
        assert_eq!(done.config_path, out.join(CONFIG_PATH));

        let saved: ProjectInfo = serde_json::from_str(&read(out, CONFIG_PATH))?;
        assert_eq!(saved, done.info);
        assert!(!out.join(UPDATE_DETAILS_PATH).exists());
        assert!(!out.join(STARTUP_INSTRUCTIONS_PATH).exists());
        Ok(())
    }

    #[test]
    fn test_missing_templates_warn_once_each_and_continue() -> Result<()> {
        let dir = tempdir()?;
        let settings = settings(&dir, RenderPolicy::Lenient);
        write_template(&settings, "claude/README.template.md", "{{PROJECT_NAME}}");

        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let mut answers = prompter(FULL_INPUT);
        let outcome = run(Profile::Full, &settings, &mut answers, &clock(), &mut events)?;
        let Outcome::Completed(done) = outcome else {
            panic!("expected completion");
        };

        assert_eq!(done.rendered, vec![settings.output_dir.join("docs/claude/README.md")]);
        assert_eq!(done.missing.len(), 4);
        let warnings = events
            .iter()
            .filter(|e| matches!(e, ScaffoldEvent::TemplateMissing { .. }))
            .count();
        assert_eq!(warnings, 4);
        assert!(settings.output_dir.join(CONFIG_PATH).is_file());
        Ok(())
    }

    #[test]
    fn test_declined_confirmation_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let settings = settings(&dir, RenderPolicy::Lenient);
        write_claude_templates(&settings);

        for (profile, input) in [
            (Profile::Simple, "Foo\npricing\nBaseline\nn\n"),
            (Profile::Enhanced, "Foo\n1\npricing\nBaseline\nyes\n"),
        ] {
            let mut events: Vec<ScaffoldEvent> = Vec::new();
            let outcome = run(profile, &settings, &mut prompter(input), &clock(), &mut events)?;
            assert_eq!(outcome, Outcome::Aborted);
            assert!(events.is_empty());
            assert!(!settings.output_dir.exists());
        }
        Ok(())
    }

    #[test]
    fn test_rerun_is_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let settings = settings(&dir, RenderPolicy::Lenient);
        write_claude_templates(&settings);
        let input = "Foo\npricing\nBaseline\ny\n";

        let mut first: Vec<ScaffoldEvent> = Vec::new();
        run(Profile::Simple, &settings, &mut prompter(input), &clock(), &mut first)?;
        let snapshot: Vec<(String, String)> = [
            "docs/claude/ALWAYS_LOAD.md",
            "docs/claude/current-sprint.md",
            "docs/claude/README.md",
            CONFIG_PATH,
            UPDATE_DETAILS_PATH,
        ]
        .iter()
        .map(|rel| (rel.to_string(), read(&settings.output_dir, rel)))
        .collect();

        let mut second: Vec<ScaffoldEvent> = Vec::new();
        run(Profile::Simple, &settings, &mut prompter(input), &clock(), &mut second)?;
        for (rel, content) in snapshot {
            assert_eq!(read(&settings.output_dir, &rel), content, "{rel} changed");
        }
        assert!(second
            .iter()
            .all(|e| !matches!(e, ScaffoldEvent::DirectoryEnsured { created: true, .. })));
        Ok(())
    }

    #[test]
    fn test_enhanced_run_writes_artifacts_and_validates() -> Result<()> {
        let dir = tempdir()?;
        let settings = settings(&dir, RenderPolicy::Lenient);
        write_template(&settings, "templates/ALWAYS_LOAD.template.md", "# {{PROJECT_NAME}}");
        write_template(
            &settings,
            "templates/bestpractices.template.md",
            "{{ALGORITHM_NAME}} [[fill me]]",
        );

        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let input = "My App\n4\nkeyword-analysis\nBaseline\nY\n";
        let mut answers = prompter(input);
        let outcome = run(Profile::Enhanced, &settings, &mut answers, &clock(), &mut events)?;
        let Outcome::Completed(done) = outcome else {
            panic!("expected completion");
        };

        let out = &settings.output_dir;
        let best_practices = out.join("docs/my-app-bestpractices.md");
        assert_eq!(fs::read_to_string(&best_practices)?, "Keyword Analysis [[fill me]]");
        assert_eq!(done.missing.len(), 4);
        for dir in Profile::Enhanced.directories() {
            assert!(out.join(dir).is_dir(), "{dir} missing");
        }
        assert!(out.join(VERIFY_SCRIPT_PATH).is_file());
        assert!(read(out, STARTUP_INSTRUCTIONS_PATH).contains("2. docs/my-app-bestpractices.md"));
        assert!(events.contains(&ScaffoldEvent::ValidationWarning {
            path: best_practices
        }));
        assert!(!events.contains(&ScaffoldEvent::ValidationPassed));
        assert!(events.iter().any(|e| matches!(
            e,
            ScaffoldEvent::ArtifactWritten {
                kind: ArtifactKind::StartupInstructions,
                ..
            }
        )));
        Ok(())
    }

    #[test]
    fn test_strict_policy_fails_on_unknown_placeholder() -> Result<()> {
        let dir = tempdir()?;
        let settings = settings(&dir, RenderPolicy::Strict);
        write_claude_templates(&settings);

        let mut events: Vec<ScaffoldEvent> = Vec::new();
        let mut answers = prompter(FULL_INPUT);
        let result = run(Profile::Full, &settings, &mut answers, &clock(), &mut events);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("{{UNKNOWN}}"));
        assert!(!settings.output_dir.join("docs/claude/README.md").exists());
        Ok(())
    }
}

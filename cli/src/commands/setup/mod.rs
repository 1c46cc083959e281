//! # docsetup Setup Commands
//!
//! File: cli/src/commands/setup/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! The `full`, `enhanced` and `simple` commands all land here. They share
//! one pipeline and differ only in the `Profile` they pass to it:
//! - `full`: asks every question, no confirmation
//! - `enhanced`: essential questions plus a project-type menu, confirmation,
//!   project directory layout, verification script, output validation
//! - `simple`: essential questions, confirmation, update-details reminder
//!
//! ## Architecture
//!
//! - `profile`: Per-profile templates, directories and switches
//! - `collect`: Questions, derived values, and the confirmation summary
//! - `pipeline`: The run itself (collect → confirm → render → scaffold)
//! - `scaffold`: Directories, persisted config, generated artifacts
//! - `validate`: Leftover-placeholder check for rendered files
//!
//! ## Examples
//!
//! ```bash
//! # Answer every question (also what a bare `docsetup` does)
//! docsetup full
//!
//! # Quick setup with templates from elsewhere, failing on unknown placeholders
//! docsetup enhanced --templates ~/doc-templates --strict
//! ```
//!
use crate::common::clock::SystemClock;
use crate::common::ui::prompt;
use crate::common::ui::report::ConsoleReporter;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::core::templating::RenderPolicy;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod collect;
mod pipeline;
mod profile;
mod scaffold;
mod validate;

pub use pipeline::{Completion, Outcome, Settings};
pub use profile::Profile;

/// Options shared by the `full`, `enhanced` and `simple` commands.
#[derive(Parser, Debug, Default, Clone)]
pub struct SetupArgs {
    /// Directory that template paths (`claude/...`, `templates/...`) are resolved against.
    #[arg(long, short = 't', env = "DOCSETUP_TEMPLATES_DIR")]
    templates: Option<PathBuf>,

    /// Directory the documentation scaffold is created under.
    #[arg(long, short = 'o', env = "DOCSETUP_OUTPUT_DIR")]
    output: Option<PathBuf>,

    /// Fail instead of leaving `{{KEY}}` tokens that have no value.
    #[arg(long)]
    strict: bool,
}

/// Runs the interactive setup for `profile` against stdin/stdout.
pub fn handle_setup(profile: Profile, args: SetupArgs) -> Result<()> {
    info!("Handling {} setup command...", profile);
    let cfg = config::load_config().context("Failed to load docsetup configuration")?;
    let settings = resolve_settings(&cfg, &args)?;
    debug!("Resolved settings: {:?}", settings);

    let mut prompter = prompt::stdin_prompter();
    let mut reporter = ConsoleReporter::new();
    let outcome = pipeline::run(
        profile,
        &settings,
        prompter.as_mut(),
        &SystemClock,
        &mut reporter,
    )?;

    match outcome {
        Outcome::Aborted => println!("Setup cancelled."),
        Outcome::Completed(completion) => print_completion_message(profile, &completion),
    }
    Ok(())
}

/// Flags override configuration; relative paths are anchored at the current directory.
fn resolve_settings(cfg: &Config, args: &SetupArgs) -> Result<Settings> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    // `Path::components` drops `.` segments, so `cwd/.` comes back as `cwd`.
    let anchor = |path: &Path| cwd.join(path).components().collect::<PathBuf>();

    let templates_dir = args
        .templates
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.paths.templates_dir));
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.paths.output_dir));
    let policy = if args.strict || cfg.render.strict {
        RenderPolicy::Strict
    } else {
        RenderPolicy::Lenient
    };

    Ok(Settings {
        templates_dir: anchor(&templates_dir),
        output_dir: anchor(&output_dir),
        policy,
    })
}

fn print_completion_message(profile: Profile, completion: &Completion) {
    println!("\n{}", "=".repeat(50));
    println!("✅ Claude documentation setup complete!");
    println!(
        "   {} document(s) rendered, answers saved to {}",
        completion.rendered.len(),
        completion.config_path.display()
    );
    if !completion.missing.is_empty() {
        println!(
            "⚠️  {} template(s) were not found and were skipped.",
            completion.missing.len()
        );
    }

    println!("\n📋 Next steps:");
    match profile {
        Profile::Full => {
            println!("1. Review and customize the generated files");
            println!("2. Add your algorithm-specific documentation to docs/claude/reference/");
            println!("3. Start your first Claude session with:");
            println!(
                "   \"Please read docs/claude/ALWAYS_LOAD.md and docs/claude/current-sprint.md\""
            );
        }
        Profile::Enhanced => {
            let best_practices = profile::best_practices_path(&completion.info);
            println!("1. Review and customize: {best_practices}");
            println!("2. Run verification: docsetup verify (or sh scripts/verify_structure.sh)");
            println!("3. Start your Claude session with the prompt in STARTUP_INSTRUCTIONS.md");

            println!("\n🔍 Template Health Check:");
            println!("✓ Project-specific best practices created");
            println!("✓ Directory structure created");
            println!("✓ Verification script added");
            println!("\n⚠️  Remember to:");
            println!("- Review and customize the best practices document");
            println!("- Remove any sections that don't apply to your project");
            println!("- Add project-specific guidelines as needed");
        }
        Profile::Simple => {
            println!("1. Start your Claude session with:");
            println!(
                "   \"Please read docs/claude/ALWAYS_LOAD.md and docs/claude/current-sprint.md\""
            );
            println!("2. Update details as you learn more about the project");
        }
    }
}

//! # docsetup Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! This file serves as the main entry point for the docsetup CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `full`, `enhanced` and `simple` all route to `commands::setup::handle_setup`
//!   with the matching `Profile`; running with no command at all means `full`
//! - `verify` routes to `commands::verify::handle_verify`
//! - All errors are propagated to this level, printed, and turned into exit code 1
//!
//! ## Examples
//!
//! ```bash
//! # Ask every question and build the docs/claude scaffold
//! docsetup
//!
//! # Three questions, then confirm
//! docsetup simple
//!
//! # Debug logging to stderr
//! docsetup -vv enhanced
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (setup profiles, verify)
mod common; // Shared utilities (fs, ui, clock)
mod core; // Core infrastructure (errors, config, templating, project info)

use commands::setup::{Profile, SetupArgs};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "docsetup",
    about = "📝 docsetup: Interactive scaffolding for AI-session project documentation",
    long_about = "Asks a few questions about your project and fills the answers into\n\
                  the documentation templates, creating the docs/claude scaffold.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Ask every question (default when no command is given)
    #[command(alias = "f")]
    Full(SetupArgs),
    /// Essential questions plus project type; adds project layout and checks
    #[command(alias = "e")]
    Enhanced(SetupArgs),
    /// Essential questions only, with smart defaults for the rest
    #[command(alias = "s")]
    Simple(SetupArgs),
    /// Check a project against the expected directory layout
    Verify(commands::verify::VerifyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Full(SetupArgs::default()));
    let command_result = match command {
        Commands::Full(args) => commands::setup::handle_setup(Profile::Full, args),
        Commands::Enhanced(args) => commands::setup::handle_setup(Profile::Enhanced, args),
        Commands::Simple(args) => commands::setup::handle_setup(Profile::Simple, args),
        Commands::Verify(args) => commands::verify::handle_verify(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

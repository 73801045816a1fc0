//! # tally CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally_cli::score::{run_score, ScoreArgs};
use tally_cli::validate::{run_validate, ValidateArgs};

/// Tally receipt tool.
///
/// Offline validation and scoring of receipt JSON files, using the same
/// rules as the Tally HTTP service.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate receipt JSON files against the structural rules.
    Validate(ValidateArgs),

    /// Validate and score receipt JSON files.
    Score(ScoreArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args),
        Commands::Score(args) => run_score(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

//! # Score Subcommand
//!
//! Validates receipt JSON files and prints the computed point total for
//! each. Scoring only runs for receipts that pass validation; an invalid
//! receipt prints its failing rule instead.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

/// Arguments for the `tally score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Receipt JSON files to score.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the score subcommand.
///
/// Returns exit code: 0 when every file validates and scores, 1 when any
/// receipt fails validation. Unreadable or unparseable files propagate as
/// operational errors (exit code 2 in `main`).
pub fn run_score(args: &ScoreArgs) -> Result<u8> {
    let mut had_failures = false;

    for path in &args.files {
        let receipt = crate::load_receipt(path)?;
        match receipt.validate() {
            Ok(()) => {
                let points = receipt.points();
                tracing::debug!(file = %path.display(), points, "scored receipt");
                println!("{}: {points} points", path.display());
            }
            Err(err) => {
                had_failures = true;
                println!("FAIL: {} ({err})", path.display());
            }
        }
    }

    Ok(if had_failures { 1 } else { 0 })
}

//! # Validate Subcommand
//!
//! Structural validation of receipt JSON files, one PASS/FAIL line per
//! file. The failing rule is printed so the receipt can be corrected and
//! resubmitted.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

/// Arguments for the `tally validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Receipt JSON files to validate.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when every file passes, 1 when any receipt fails
/// validation. Unreadable or unparseable files propagate as operational
/// errors (exit code 2 in `main`).
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let mut had_failures = false;

    for path in &args.files {
        let receipt = crate::load_receipt(path)?;
        match receipt.validate() {
            Ok(()) => println!("PASS: {}", path.display()),
            Err(err) => {
                had_failures = true;
                println!("FAIL: {} ({err})", path.display());
            }
        }
    }

    Ok(if had_failures { 1 } else { 0 })
}

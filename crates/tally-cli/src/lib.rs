//! # tally-cli — Command-Line Tool for Receipt Scoring
//!
//! Provides the `tally` binary for offline work with receipt JSON files:
//! structural validation and deterministic points computation without
//! running the HTTP service.
//!
//! ## Subcommands
//!
//! - `tally validate <FILE>...` — per-file PASS/FAIL against the
//!   structural rules, with the failing rule on FAIL.
//! - `tally score <FILE>...` — validation plus the computed point total.
//!
//! A file that cannot be read or is not receipt-shaped JSON is an
//! operational error (exit code 2), distinct from a receipt that decodes
//! but fails validation (exit code 1). This mirrors the HTTP service's
//! split between malformed payloads and schema-invalid receipts.

pub mod score;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use tally_core::Receipt;

/// Load a receipt from a JSON file.
///
/// # Errors
///
/// Fails when the file cannot be read or does not decode as the receipt
/// wire shape. Both are operational errors, not validation failures.
pub fn load_receipt(path: &Path) -> Result<Receipt> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("{} is not receipt-shaped JSON", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_receipt_reads_wire_format() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "retailer": "Target",
                "purchaseDate": "2022-01-01",
                "purchaseTime": "13:01",
                "items": [{{"shortDescription": "Gatorade", "price": "2.25"}}],
                "total": "2.25"
            }}"#
        )
        .unwrap();

        let receipt = load_receipt(file.path()).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items.len(), 1);
    }

    #[test]
    fn load_receipt_fails_on_missing_file() {
        let err = load_receipt(Path::new("/nonexistent/receipt.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }

    #[test]
    fn load_receipt_fails_on_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_receipt(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("not receipt-shaped"));
    }
}

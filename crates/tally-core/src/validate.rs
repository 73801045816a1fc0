//! # Receipt Validation
//!
//! Declarative structural checks applied to every candidate receipt before
//! the points engine runs. Each pattern is a named constant so tests can
//! target individual rules.
//!
//! Rules are checked in a fixed order and the first defect is reported.
//! The order only affects which defect a caller sees; the pass/fail
//! outcome is order-independent. Any single failure rejects the whole
//! receipt, there is no partial acceptance.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::receipt::{Item, Receipt};

/// Retailer names: letters, digits, underscore, whitespace, hyphen, ampersand.
pub static RETAILER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\s\-&]+$").expect("retailer pattern compiles"));

/// Monetary amounts: one or more digits, a dot, exactly two fractional
/// digits. No sign, no thousands separators, no scientific notation.
pub static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d{2}$").expect("amount pattern compiles"));

/// Item descriptions: letters, digits, underscore, whitespace, hyphen.
pub static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\s\-]+$").expect("description pattern compiles"));

/// `purchaseDate` format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `purchaseTime` format (24-hour clock, no seconds).
pub const TIME_FORMAT: &str = "%H:%M";

/// Check a candidate receipt against the structural rules.
///
/// Pure function, no side effects. Returns the first defect found:
///
/// 1. Presence: the four string fields non-empty, `items` non-empty.
/// 2. `retailer` matches [`RETAILER_PATTERN`].
/// 3. `total` matches [`AMOUNT_PATTERN`].
/// 4. `purchaseDate` parses as a real `YYYY-MM-DD` calendar date.
/// 5. `purchaseTime` parses as a real 24-hour `HH:MM` clock time.
/// 6. Every item has a non-empty description matching
///    [`DESCRIPTION_PATTERN`] and a price matching [`AMOUNT_PATTERN`].
///
/// # Errors
///
/// The [`ValidationError`] variant for the first rule that failed.
pub fn validate(receipt: &Receipt) -> Result<(), ValidationError> {
    if receipt.retailer.is_empty() {
        return Err(ValidationError::MissingField("retailer"));
    }
    if receipt.purchase_date.is_empty() {
        return Err(ValidationError::MissingField("purchaseDate"));
    }
    if receipt.purchase_time.is_empty() {
        return Err(ValidationError::MissingField("purchaseTime"));
    }
    if receipt.total.is_empty() {
        return Err(ValidationError::MissingField("total"));
    }
    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    if !RETAILER_PATTERN.is_match(&receipt.retailer) {
        return Err(ValidationError::InvalidRetailer(receipt.retailer.clone()));
    }
    if !AMOUNT_PATTERN.is_match(&receipt.total) {
        return Err(ValidationError::InvalidAmount(receipt.total.clone()));
    }
    if NaiveDate::parse_from_str(&receipt.purchase_date, DATE_FORMAT).is_err() {
        return Err(ValidationError::InvalidPurchaseDate(
            receipt.purchase_date.clone(),
        ));
    }
    if NaiveTime::parse_from_str(&receipt.purchase_time, TIME_FORMAT).is_err() {
        return Err(ValidationError::InvalidPurchaseTime(
            receipt.purchase_time.clone(),
        ));
    }

    for item in &receipt.items {
        validate_item(item)?;
    }

    Ok(())
}

/// Check one item's description and price.
fn validate_item(item: &Item) -> Result<(), ValidationError> {
    if item.short_description.is_empty() {
        return Err(ValidationError::MissingField("shortDescription"));
    }
    if item.price.is_empty() {
        return Err(ValidationError::MissingField("price"));
    }
    if !DESCRIPTION_PATTERN.is_match(&item.short_description) {
        return Err(ValidationError::InvalidItemDescription(
            item.short_description.clone(),
        ));
    }
    if !AMOUNT_PATTERN.is_match(&item.price) {
        return Err(ValidationError::InvalidAmount(item.price.clone()));
    }
    Ok(())
}

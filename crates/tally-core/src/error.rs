//! # Error Hierarchy
//!
//! Structured validation errors built with `thiserror`. One variant per
//! rule family, each carrying the offending value so callers that want a
//! reason can report it. The pass/fail outcome never depends on which
//! variant is produced first.

use thiserror::Error;

/// A receipt failed one of the structural validation rules.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("missing or empty field: {0}")]
    MissingField(&'static str),

    /// The items sequence is empty.
    #[error("receipt must contain at least one item")]
    NoItems,

    /// Retailer contains characters outside letters, digits, whitespace,
    /// hyphen, and ampersand.
    #[error("invalid retailer: {0:?} (letters, digits, whitespace, '-' and '&' only)")]
    InvalidRetailer(String),

    /// A monetary amount is not digits, a dot, and exactly two fractional
    /// digits.
    #[error("invalid amount: {0:?} (expected e.g. \"12.34\": no sign, two decimals)")]
    InvalidAmount(String),

    /// The purchase date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid purchase date: {0:?} (expected YYYY-MM-DD)")]
    InvalidPurchaseDate(String),

    /// The purchase time is not a valid 24-hour `HH:MM` clock time.
    #[error("invalid purchase time: {0:?} (expected 24-hour HH:MM)")]
    InvalidPurchaseTime(String),

    /// An item description contains characters outside letters, digits,
    /// whitespace, and hyphen.
    #[error("invalid item description: {0:?} (letters, digits, whitespace and '-' only)")]
    InvalidItemDescription(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_display() {
        let err = ValidationError::MissingField("retailer");
        assert!(format!("{err}").contains("retailer"));
    }

    #[test]
    fn no_items_display() {
        let err = ValidationError::NoItems;
        assert!(format!("{err}").contains("at least one item"));
    }

    #[test]
    fn invalid_retailer_display() {
        let err = ValidationError::InvalidRetailer("caf\u{e9}!".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("caf"));
        assert!(msg.contains("'&'"));
    }

    #[test]
    fn invalid_amount_display() {
        let err = ValidationError::InvalidAmount("1.5".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("1.5"));
        assert!(msg.contains("two decimals"));
    }

    #[test]
    fn invalid_purchase_date_display() {
        let err = ValidationError::InvalidPurchaseDate("2022-13-01".to_string());
        assert!(format!("{err}").contains("2022-13-01"));
    }

    #[test]
    fn invalid_purchase_time_display() {
        let err = ValidationError::InvalidPurchaseTime("24:00".to_string());
        assert!(format!("{err}").contains("24:00"));
    }

    #[test]
    fn invalid_item_description_display() {
        let err = ValidationError::InvalidItemDescription("Cola & Lime".to_string());
        assert!(format!("{err}").contains("Cola & Lime"));
    }

    #[test]
    fn all_error_variants_are_debug() {
        let errors = [
            ValidationError::MissingField("total"),
            ValidationError::NoItems,
            ValidationError::InvalidRetailer(String::new()),
            ValidationError::InvalidAmount(String::new()),
            ValidationError::InvalidPurchaseDate(String::new()),
            ValidationError::InvalidPurchaseTime(String::new()),
            ValidationError::InvalidItemDescription(String::new()),
        ];
        for err in &errors {
            assert!(!format!("{err:?}").is_empty());
        }
    }
}

//! # Receipt Domain Types
//!
//! The submitted purchase receipt and its line items. Wire field names are
//! camelCase (`purchaseDate`, `shortDescription`); the Rust fields follow
//! crate convention and serde handles the mapping.
//!
//! All fields are textual. Parsing into calendar/clock/decimal values
//! happens in [`crate::validate`] and [`crate::points`], never during
//! deserialization, so a structurally present but semantically invalid
//! value reaches the validator instead of failing JSON decode.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A submitted purchase receipt, immutable once accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the retailer or store.
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Purchased items, in submission order. At least one is required.
    pub items: Vec<Item>,
    /// Receipt total, digits with exactly two fractional digits.
    pub total: String,
}

/// One line entry within a receipt. No identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description.
    pub short_description: String,
    /// Item price, same textual format as the receipt total.
    pub price: String,
}

impl Receipt {
    /// Check this receipt against the structural rules.
    ///
    /// See [`crate::validate::validate`] for the rule set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        crate::validate::validate(self)
    }

    /// Whether this receipt passes all structural rules.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Compute the point total for this receipt.
    ///
    /// Meaningful only after [`Receipt::validate`] has passed; see
    /// [`crate::points::score`].
    pub fn points(&self) -> u64 {
        crate::points::score(self)
    }
}

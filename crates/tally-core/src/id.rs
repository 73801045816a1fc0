//! # Receipt Identifier
//!
//! Opaque identifier newtype issued for each accepted receipt. UUID-backed
//! and always valid by construction; the string form is what clients see
//! and submit for lookup.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier referencing one accepted receipt's score.
///
/// Freshly generated per accepted submission, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse an identifier from its string form.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`uuid::Error`] when the string is not a
    /// well-formed UUID. Callers looking up a score typically treat that
    /// the same as an unknown identifier.
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value).map(Self)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

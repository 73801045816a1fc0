#![deny(missing_docs)]

//! # tally-core — Receipt Domain and Points Engine
//!
//! Foundational crate for the Tally receipt points service. Defines the
//! receipt data model, the structural validator, and the deterministic
//! points engine. It has no internal crate dependencies; only `serde`,
//! `thiserror`, `chrono`, `uuid`, `regex`, and `once_cell` from the
//! external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Validation before scoring.** [`validate()`](validate::validate)
//!    rejects malformed receipts before the points engine runs.
//!    [`score()`](points::score) is meaningful only for receipts that
//!    passed; it never fails, a parse failure simply contributes zero.
//!
//! 2. **Declarative pattern checks.** Every structural rule is a named
//!    regex constant in [`validate`], so tests can target individual rules.
//!
//! 3. **Textual fields until validated.** Dates, times, and amounts stay
//!    strings in [`Receipt`]. A well-typed but semantically invalid
//!    submission (month 13, hour 24) is a validation failure, not a
//!    decode failure.

pub mod error;
pub mod id;
pub mod points;
pub mod receipt;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use id::ReceiptId;
pub use points::score;
pub use receipt::{Item, Receipt};
pub use validate::validate;

//! # Points Engine
//!
//! Deterministic conversion of a validated receipt into an integer point
//! total: six independent, additive rules, no cap.
//!
//! Monetary strings are parsed as binary floating point and combined with
//! truncating casts; the description rule rounds up with a small epsilon
//! rather than a true ceiling. Switching to exact decimal arithmetic would
//! change computed totals at exact boundaries, so the float semantics are
//! load-bearing here.
//!
//! Every rule treats an unparseable value as contributing zero. The
//! validator guarantees that cannot happen for gated input; callers must
//! run [`crate::validate::validate`] first.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::receipt::{Item, Receipt};
use crate::validate::{DATE_FORMAT, TIME_FORMAT};

/// Compute the point total for a receipt: the sum of all six rules.
///
/// Deterministic and side-effect free. Meaningful only for receipts that
/// passed validation; for anything else the result is unspecified (it
/// still never panics).
pub fn score(receipt: &Receipt) -> u64 {
    retailer_points(&receipt.retailer)
        + round_dollar_points(&receipt.total)
        + quarter_multiple_points(&receipt.total)
        + item_pair_points(&receipt.items)
        + description_points(&receipt.items)
        + odd_day_points(&receipt.purchase_date)
        + afternoon_points(&receipt.purchase_time)
}

/// One point per ASCII letter or digit in the retailer name.
///
/// Whitespace, hyphens, and ampersands do not count.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// 50 points when the total has no fractional part (e.g. `"9.00"`).
pub fn round_dollar_points(total: &str) -> u64 {
    match parse_amount(total) {
        Some(amount) if amount.fract() == 0.0 => 50,
        _ => 0,
    }
}

/// 25 points when the total, in integer cents, is a multiple of 25.
///
/// Cents are `(amount * 100.0) as i64`: a truncating cast, not a rounding
/// one. Exact quarter multiples are dyadic rationals and survive the cast
/// exactly.
pub fn quarter_multiple_points(total: &str) -> u64 {
    match parse_amount(total) {
        Some(amount) if (amount * 100.0) as i64 % 25 == 0 => 25,
        _ => 0,
    }
}

/// 5 points for every complete pair of items.
pub fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2) * 5
}

/// Description-length bonus, summed over all items.
///
/// An item whose trimmed description length is a multiple of three earns
/// 20% of its price, rounded up: `(price * 0.2 + 0.999999) as u64`. The
/// epsilon keeps exact multiples of five (where `price * 0.2` lands on a
/// whole number) from being bumped to the next integer while still
/// rounding every fractional result up.
pub fn description_points(items: &[Item]) -> u64 {
    items.iter().map(item_description_points).sum()
}

/// The description-length bonus for a single item.
fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }
    match parse_amount(&item.price) {
        Some(price) => (price * 0.2 + 0.999999) as u64,
        None => 0,
    }
}

/// 6 points when the day of the month is odd.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => 6,
        _ => 0,
    }
}

/// 10 points when the purchase time is strictly between 14:00 and 16:00.
///
/// Exclusive on both ends: exactly 14:00 or 16:00 earns nothing.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    let time = match NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) {
        Ok(time) => time,
        Err(_) => return 0,
    };
    let start = NaiveTime::from_hms_opt(14, 0, 0).expect("valid constant bound");
    let end = NaiveTime::from_hms_opt(16, 0, 0).expect("valid constant bound");
    if time > start && time < end {
        10
    } else {
        0
    }
}

/// Parse a monetary string as a base-10 float. `None` means the rule
/// using it contributes zero.
fn parse_amount(value: &str) -> Option<f64> {
    value.parse::<f64>().ok()
}

//! # Date Arithmetic
//!
//! Every expiry computation in the stack takes the evaluation date as an
//! explicit parameter. There is deliberately no `today()` here: reading the
//! wall clock is a presentation-layer concern (the CLI's `--as-of` default),
//! and keeping it out of the core makes every evaluation reproducible.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Exact signed day difference between an expiry date and the evaluation
/// date. Negative when the document has already expired.
pub fn days_until_expiry(expiry: NaiveDate, as_of: NaiveDate) -> i64 {
    (expiry - as_of).num_days()
}

/// Parse a `YYYY-MM-DD` calendar date, mapping failure to a typed error.
///
/// This is the single entry point for textual dates at API and CLI
/// boundaries; a malformed string becomes a [`ValidationError::InvalidDate`]
/// instead of a sentinel value propagating into day arithmetic.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when the string is not a valid
/// ISO calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| ValidationError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

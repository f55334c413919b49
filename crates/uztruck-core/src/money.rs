//! # Money and Per-Currency Totals
//!
//! The requirement catalog quotes costs in several currencies (RUB, KZT,
//! USD, PLN). Amounts in different currencies are never added into one
//! number: [`Money`] always carries its currency, and [`CostBreakdown`]
//! accumulates totals keyed by currency code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A three-letter uppercase ISO 4217 currency code (`"RUB"`, `"KZT"`).
///
/// # Validation
///
/// Exactly three ASCII letters; lowercase input is normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Create a currency code from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCurrencyCode`] if the trimmed input
    /// is not exactly three ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let upper = s.trim().to_uppercase();
        if upper.len() != 3 || !upper.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrencyCode(s));
        }
        Ok(Self(upper))
    }

    /// Access the uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An amount of money in a single currency.
///
/// Catalog costs are whole-unit figures (45 000 RUB, 50 USD), so amounts
/// are unsigned integers in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: u64,
    /// The currency the amount is denominated in.
    pub currency: CurrencyCode,
}

impl Money {
    /// Construct an amount in the given currency.
    pub fn new(amount: u64, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Per-currency cost totals.
///
/// Backed by a `BTreeMap` so serialized output is ordered by currency code
/// and therefore byte-stable for identical inputs. Serializes transparently
/// as a JSON object: `{"KZT": 15000, "RUB": 45000}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostBreakdown(BTreeMap<CurrencyCode, u64>);

impl CostBreakdown {
    /// An empty breakdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount into the total for its currency.
    pub fn add(&mut self, cost: &Money) {
        *self.0.entry(cost.currency.clone()).or_insert(0) += cost.amount;
    }

    /// Total for one currency, zero if absent.
    pub fn total_for(&self, currency: &CurrencyCode) -> u64 {
        self.0.get(currency).copied().unwrap_or(0)
    }

    /// Number of distinct currencies present.
    pub fn currency_count(&self) -> usize {
        self.0.len()
    }

    /// True when no costs have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate totals in currency-code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, &u64)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rub() -> CurrencyCode {
        CurrencyCode::new("RUB").unwrap()
    }

    fn kzt() -> CurrencyCode {
        CurrencyCode::new("KZT").unwrap()
    }

    // -- CurrencyCode --

    #[test]
    fn currency_code_valid() {
        assert_eq!(CurrencyCode::new("usd").unwrap().as_str(), "USD");
    }

    #[test]
    fn currency_code_rejects_invalid() {
        assert!(CurrencyCode::new("").is_err());
        assert!(CurrencyCode::new("RU").is_err());
        assert!(CurrencyCode::new("RUBL").is_err());
        assert!(CurrencyCode::new("R1B").is_err());
    }

    // -- Money --

    #[test]
    fn money_display() {
        let m = Money::new(45000, rub());
        assert_eq!(format!("{m}"), "45000 RUB");
    }

    // -- CostBreakdown --

    #[test]
    fn breakdown_keeps_currencies_apart() {
        let mut totals = CostBreakdown::new();
        totals.add(&Money::new(45000, rub()));
        totals.add(&Money::new(15000, kzt()));
        totals.add(&Money::new(5000, kzt()));

        assert_eq!(totals.total_for(&rub()), 45000);
        assert_eq!(totals.total_for(&kzt()), 20000);
        assert_eq!(totals.currency_count(), 2);
    }

    #[test]
    fn breakdown_missing_currency_is_zero() {
        let totals = CostBreakdown::new();
        assert_eq!(totals.total_for(&rub()), 0);
        assert!(totals.is_empty());
    }

    #[test]
    fn breakdown_serializes_as_ordered_object() {
        let mut totals = CostBreakdown::new();
        totals.add(&Money::new(500, CurrencyCode::new("USD").unwrap()));
        totals.add(&Money::new(45000, rub()));
        totals.add(&Money::new(15000, kzt()));

        let json = serde_json::to_string(&totals).unwrap();
        // BTreeMap ordering: KZT < RUB < USD.
        assert_eq!(json, r#"{"KZT":15000,"RUB":45000,"USD":500}"#);
    }

    #[test]
    fn breakdown_zero_amount_still_records_currency() {
        // A zero-cost requirement (e.g. fuel documentation) still surfaces
        // its currency in the breakdown.
        let mut totals = CostBreakdown::new();
        totals.add(&Money::new(0, rub()));
        assert_eq!(totals.currency_count(), 1);
        assert_eq!(totals.total_for(&rub()), 0);
    }
}

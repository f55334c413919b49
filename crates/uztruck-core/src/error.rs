//! # Error Hierarchy
//!
//! Structured validation errors for the domain primitives in this crate,
//! built with `thiserror`. Each variant carries the rejected input and the
//! expected format so that operators can diagnose bad reference data or a
//! malformed request without guesswork.
//!
//! Higher layers define their own error types (`CatalogError`,
//! `FleetError`, `DeficiencyError`) and convert from this one where a
//! primitive fails to parse at a boundary.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Country code is not a two-letter ISO 3166-1 alpha-2 code.
    #[error("invalid country code: \"{0}\" (expected two ASCII letters, e.g. \"RU\")")]
    InvalidCountryCode(String),

    /// Currency code is not a three-letter ISO 4217 code.
    #[error("invalid currency code: \"{0}\" (expected three ASCII letters, e.g. \"RUB\")")]
    InvalidCurrencyCode(String),

    /// Route identifier is empty or whitespace-only.
    #[error("invalid route id: must be non-empty")]
    InvalidRouteId,

    /// Numeric identifier failed to parse.
    #[error("invalid identifier: \"{0}\" (expected an unsigned integer)")]
    InvalidIdentifier(String),

    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: \"{value}\" ({reason})")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_country_code_display() {
        let err = ValidationError::InvalidCountryCode("Russia".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Russia"));
        assert!(msg.contains("two ASCII letters"));
    }

    #[test]
    fn invalid_currency_code_display() {
        let err = ValidationError::InvalidCurrencyCode("rubles".to_string());
        assert!(format!("{err}").contains("rubles"));
    }

    #[test]
    fn invalid_date_display() {
        let err = ValidationError::InvalidDate {
            value: "2024-13-45".to_string(),
            reason: "input is out of range".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("2024-13-45"));
        assert!(msg.contains("out of range"));
    }

    #[test]
    fn invalid_identifier_display() {
        let err = ValidationError::InvalidIdentifier("abc".to_string());
        assert!(format!("{err}").contains("abc"));
    }

    #[test]
    fn all_error_types_are_debug() {
        let e1 = ValidationError::InvalidRouteId;
        let e2 = ValidationError::InvalidCountryCode(String::new());
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
    }
}

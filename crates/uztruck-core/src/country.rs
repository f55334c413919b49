//! # Country Codes
//!
//! Validated ISO 3166-1 alpha-2 country codes. The requirement catalog's
//! `"ALL"` sentinel (a requirement that applies regardless of destination)
//! is deliberately **not** representable as a [`CountryCode`]; it is a
//! separate scope variant in the catalog crate, so the sentinel can never
//! leak into route definitions or country selections.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A two-letter uppercase ISO 3166-1 alpha-2 country code (`"RU"`, `"KZ"`).
///
/// # Validation
///
/// Exactly two ASCII letters; lowercase input is normalized to uppercase.
/// Anything else — including the three-letter `"ALL"` sentinel — is
/// rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code from a string, validating the two-letter format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the trimmed input
    /// is not exactly two ASCII letters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let upper = s.trim().to_uppercase();
        if upper.len() != 2 || !upper.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCountryCode(s));
        }
        Ok(Self(upper))
    }

    /// Access the uppercase code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

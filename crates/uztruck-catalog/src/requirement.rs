//! # Document Requirements
//!
//! A [`DocumentRequirement`] is one row of the per-country compliance
//! catalog: which paper a destination demands, how urgent it is, what it
//! costs, and how long issuance takes. Requirements are immutable
//! reference data; nothing in the stack mutates them after seeding.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use uztruck_core::{
    CountryCode, DocumentCategory, Money, RequirementId, RequirementPriority,
};

/// Destination scope of a requirement.
///
/// The catalog's wire format uses a `country_code` string column where
/// `"ALL"` means "applies regardless of destination". In the type system
/// the sentinel is its own variant, so a [`CountryCode`] can never hold
/// `"ALL"` and a scope can never be mistaken for a route country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementScope {
    /// Applies on every international trip, whatever the destination.
    AllCountries,
    /// Applies only when the trip enters the given country.
    Country(CountryCode),
}

const ALL_TOKEN: &str = "ALL";

impl RequirementScope {
    /// Whether this scope covers the given destination country.
    pub fn applies_to(&self, country: &CountryCode) -> bool {
        match self {
            Self::AllCountries => true,
            Self::Country(c) => c == country,
        }
    }

    /// True for the `ALL` sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::AllCountries)
    }

    /// Wire representation: `"ALL"` or the two-letter country code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::AllCountries => ALL_TOKEN,
            Self::Country(c) => c.as_str(),
        }
    }
}

impl std::fmt::Display for RequirementScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RequirementScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequirementScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == ALL_TOKEN {
            return Ok(Self::AllCountries);
        }
        CountryCode::new(s)
            .map(Self::Country)
            .map_err(D::Error::custom)
    }
}

/// One row of the per-country document requirement catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRequirement {
    /// Catalog identifier, unique across all countries.
    pub id: RequirementId,
    /// Destination scope (`"ALL"` on the wire for the sentinel).
    #[serde(rename = "country_code")]
    pub scope: RequirementScope,
    /// Requirement type slug, the join key for held-document matching
    /// (e.g. `"osago_insurance"`).
    pub document_type: String,
    /// Operator-facing name, as printed on the paper itself.
    pub display_name: String,
    /// One-line description.
    pub description: String,
    /// Whether crossing without it is a refusal, not merely friction.
    pub mandatory: bool,
    /// Validity period granted at issuance, where the paper expires.
    pub validity_period_months: Option<u32>,
    /// Renewal reminder offsets, in days before expiry, descending.
    pub reminder_days_before: Vec<u32>,
    /// Functional grouping.
    pub category: DocumentCategory,
    /// Operational urgency.
    pub priority: RequirementPriority,
    /// Typical processing time from application to issuance.
    pub processing_time_hours: u32,
    /// Typical cost of obtaining the paper.
    pub estimated_cost: Money,
    /// Authority that issues the paper.
    pub issuing_authority: String,
}

impl DocumentRequirement {
    /// First whitespace-delimited token of the display name, lower-cased.
    ///
    /// This is the key the legacy name matcher compares against; see the
    /// deficiency evaluator's compatibility shim for the policy itself.
    pub fn display_name_key(&self) -> String {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

//! # Country Directory
//!
//! Reference data about the corridor countries themselves: local names,
//! expected transit-permit lead times and visa requirements. This is
//! advisory display data; the binding source of what papers a trip needs
//! is the requirement catalog.

use serde::{Deserialize, Serialize};
use uztruck_core::CountryCode;

/// Corridor country reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 code.
    pub code: CountryCode,
    /// English short name.
    pub name: String,
    /// Uzbek short name, shown in operator-facing listings.
    pub name_uz: String,
    /// Working days typically needed to arrange a transit permit.
    pub transit_days: u32,
    /// Whether drivers need a visa to cross.
    pub visa_required: bool,
    /// Free-form operator notes.
    pub additional_info: String,
}

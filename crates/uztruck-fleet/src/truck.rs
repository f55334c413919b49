//! # Trucks
//!
//! The fleet register entry for a vehicle. Document counts per alert level
//! are deliberately absent here: they are computed views over the document
//! registry ([`crate::stats`]), never stored facts.

use serde::{Deserialize, Serialize};
use uztruck_core::TruckId;

/// Operational status of a truck in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckStatus {
    /// In service and assignable to routes.
    Active,
    /// Temporarily off the road for repair or servicing.
    Maintenance,
    /// Sold; retained for document history only.
    Sold,
    /// Parked, not assignable (expired papers, no driver, ...).
    Inactive,
}

impl TruckStatus {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Sold => "sold",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vehicle in the fleet register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Fleet register identifier.
    pub id: TruckId,
    /// State registration plate (e.g. `"01A123BC"`).
    pub license_plate: String,
    /// Manufacturer.
    pub brand: String,
    /// Model designation.
    pub model: String,
    /// Model year.
    pub year: u16,
    /// Rated cargo capacity in tonnes.
    pub capacity_tons: f64,
    /// Engine displacement in litres.
    pub engine_volume: f64,
    /// Current operational status.
    pub status: TruckStatus,
}

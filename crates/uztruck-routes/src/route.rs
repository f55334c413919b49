//! # Route Model
//!
//! A corridor route is immutable reference data: the transit countries in
//! driving order, the border crossings between them, and the toll roads a
//! driver pays along the way. Toll costs are [`Money`] in the road's local
//! currency and are never converted or summed across currencies.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use uztruck_core::{CountryCode, Money, RouteId};

/// Driving difficulty grade of a corridor route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDifficulty {
    /// Straightforward corridor, no special preparation.
    Easy,
    /// Long haul with seasonal or administrative friction.
    Medium,
    /// Demanding corridor: distance, weather and heavy regulation.
    Hard,
}

impl RouteDifficulty {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// A geographic point, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, north positive.
    pub lat: f64,
    /// Longitude, east positive.
    pub lon: f64,
}

/// A border checkpoint between two transit countries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderCrossing {
    /// Checkpoint name (local naming, both sides).
    pub name: String,
    /// Country the driver leaves.
    pub from_country: CountryCode,
    /// Country the driver enters.
    pub to_country: CountryCode,
    /// Operating schedule, e.g. `"24/7"`.
    pub working_hours: String,
    /// Typical queue time in hours.
    pub average_wait_hours: u32,
    /// Checkpoint location.
    pub coordinates: Coordinates,
}

/// A tolled road section on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollInfo {
    /// Road or section name, e.g. `"M4 Don"`.
    pub road: String,
    /// Country the toll applies in.
    pub country: CountryCode,
    /// Toll cost, quoted in the road's local currency.
    pub cost: Money,
    /// Accepted payment methods.
    pub payment_methods: Vec<String>,
}

/// A corridor route through the Eurasian transit network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EurasianRoute {
    /// Directory slug, e.g. `"route_1"`.
    pub id: RouteId,
    /// Operator-facing route name.
    pub name: String,
    /// Departure city.
    pub origin: String,
    /// Arrival city.
    pub destination: String,
    /// Transit countries in driving order, origin country first.
    pub countries: Vec<CountryCode>,
    /// Total driving distance.
    pub distance_km: u32,
    /// Typical driving time, excluding border queues.
    pub estimated_duration_hours: u32,
    /// Driving difficulty grade.
    pub difficulty: RouteDifficulty,
    /// Operator demand score, 0 to 100.
    pub popularity: u8,
    /// Whether the route is viable only part of the year.
    pub seasonal: bool,
    /// Regulatory friction tags, e.g. `"winter_equipment"`.
    pub restrictions: Vec<String>,
    /// Checkpoints along the route, in driving order.
    pub border_crossings: Vec<BorderCrossing>,
    /// Tolled sections along the route.
    pub tolls: Vec<TollInfo>,
}

impl EurasianRoute {
    /// The route's transit countries as a set, ready for a deficiency
    /// evaluation. Duplicates in the driving-order list collapse here.
    pub fn country_set(&self) -> BTreeSet<CountryCode> {
        self.countries.iter().cloned().collect()
    }
}

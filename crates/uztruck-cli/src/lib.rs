//! # uztruck CLI library
//!
//! Subcommand handlers for the `uztruck` binary, one module per command
//! group. Every handler runs against [`Context::seeded`] and returns the
//! process exit code; `main` maps errors to exit code 2.
//!
//! The `--as-of` flag is the only place in the stack that reads the wall
//! clock. Handlers resolve it once and pass a concrete date down.

pub mod check;
pub mod directory;
pub mod fleet;
pub mod serve;

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;

use uztruck_catalog::{RequirementCatalog, StaticCatalog};
use uztruck_core::{parse_date, CountryCode};
use uztruck_deficiency::DeficiencyEvaluator;
use uztruck_fleet::FleetStore;
use uztruck_routes::StaticRouteDirectory;

/// Seeded stores shared by the offline subcommands.
pub struct Context {
    /// The requirement catalog.
    pub catalog: Arc<StaticCatalog>,
    /// Trucks, document types and held documents.
    pub fleet: FleetStore,
    /// Corridor route directory.
    pub routes: StaticRouteDirectory,
    /// Deficiency evaluator over the catalog and the fleet.
    pub evaluator: DeficiencyEvaluator,
}

impl Context {
    /// Build the context from the seeded reference data.
    pub fn seeded() -> Self {
        let catalog = Arc::new(StaticCatalog::eurasian());
        let fleet = FleetStore::seeded();
        let evaluator = DeficiencyEvaluator::new(
            catalog.clone() as Arc<dyn RequirementCatalog>,
            Arc::new(fleet.clone()),
            Arc::new(fleet.clone()),
            Arc::new(fleet.clone()),
        );
        Self {
            catalog,
            fleet,
            routes: StaticRouteDirectory::eurasian(),
            evaluator,
        }
    }
}

/// Resolve an optional `--as-of` flag, defaulting to today.
pub fn resolve_as_of(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(raw) => parse_date(raw).context("invalid --as-of date"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse `--countries` values into a selection set. Duplicates collapse.
pub fn parse_countries(values: &[String]) -> Result<BTreeSet<CountryCode>> {
    values
        .iter()
        .map(|v| CountryCode::new(v.as_str()).context("invalid --countries value"))
        .collect()
}

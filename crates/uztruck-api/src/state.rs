//! # Application State
//!
//! Shared state for the HTTP service: the seeded requirement catalog,
//! country directory and rule table, the fleet store, the route
//! directory, and a deficiency evaluator wired over all of them. Cloning
//! is cheap — everything is behind `Arc` and the fleet store shares its
//! lock across clones.

use std::sync::Arc;

use uztruck_catalog::{CountryInfo, RequirementCatalog, StaticCatalog, ValidationRuleSet};
use uztruck_deficiency::DeficiencyEvaluator;
use uztruck_fleet::FleetStore;
use uztruck_routes::StaticRouteDirectory;

/// Service configuration, read from the environment.
///
/// No secrets exist here: the service carries no credentials, so `Debug`
/// redacts nothing.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the server binds, `UZTRUCK_ADDR`.
    pub addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            addr: std::env::var("UZTRUCK_ADDR").unwrap_or(defaults.addr),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The requirement catalog.
    pub catalog: Arc<StaticCatalog>,
    /// Corridor country directory, ordered by code.
    pub countries: Arc<Vec<CountryInfo>>,
    /// Field-validation rule table, keyed by requirement slug.
    pub rules: Arc<ValidationRuleSet>,
    /// Trucks, document types and held documents.
    pub fleet: FleetStore,
    /// Corridor route directory.
    pub routes: Arc<StaticRouteDirectory>,
    /// Deficiency evaluator wired over the catalog and the fleet store.
    pub evaluator: DeficiencyEvaluator,
}

impl AppState {
    /// Build state from the seeded reference data.
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
            countries: Arc::new(uztruck_catalog::seed::eurasian_countries()),
            rules: Arc::new(ValidationRuleSet::eurasian()),
            fleet,
            routes: Arc::new(StaticRouteDirectory::eurasian()),
            evaluator,
        }
    }
}

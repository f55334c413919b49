//! # Route Directory
//!
//! The lookup seam for corridor routes. The API and CLI resolve a route
//! slug here, then hand the route's country set to the deficiency
//! evaluator; swapping in an operator-maintained directory later touches
//! nothing downstream.

use std::collections::BTreeMap;

use uztruck_core::RouteId;

use crate::route::EurasianRoute;
use crate::seed;

/// Read access to the corridor route directory.
pub trait RouteDirectory: Send + Sync {
    /// Every route, ordered by slug.
    fn list(&self) -> Vec<EurasianRoute>;

    /// Look up one route by slug.
    fn get(&self, id: &RouteId) -> Option<EurasianRoute>;
}

/// In-memory directory, built once from reference data and never mutated.
#[derive(Debug, Clone)]
pub struct StaticRouteDirectory {
    routes: BTreeMap<RouteId, EurasianRoute>,
}

impl StaticRouteDirectory {
    /// Build a directory from a list of routes. A duplicate slug keeps
    /// the last entry; reference data never contains duplicates.
    pub fn new(routes: Vec<EurasianRoute>) -> Self {
        Self {
            routes: routes.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    /// The seeded corridor directory (Moscow, Berlin and Warsaw routes).
    pub fn eurasian() -> Self {
        Self::new(seed::eurasian_routes())
    }

    /// Number of routes in the directory.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when the directory has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteDirectory for StaticRouteDirectory {
    fn list(&self) -> Vec<EurasianRoute> {
        self.routes.values().cloned().collect()
    }

    fn get(&self, id: &RouteId) -> Option<EurasianRoute> {
        self.routes.get(id).cloned()
    }
}

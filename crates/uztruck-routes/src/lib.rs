#![deny(missing_docs)]

//! # uztruck-routes — Corridor Route Directory
//!
//! Reference data for the Tashkent-based transit corridors: each
//! [`EurasianRoute`] carries its transit countries in driving order plus
//! the border crossings and toll roads along the way. A route check is
//! just a deficiency evaluation over the route's country set; the
//! directory itself knows nothing about trucks or documents.

pub mod directory;
pub mod route;
pub mod seed;

pub use directory::{RouteDirectory, StaticRouteDirectory};
pub use route::{BorderCrossing, Coordinates, EurasianRoute, RouteDifficulty, TollInfo};

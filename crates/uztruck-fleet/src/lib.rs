#![deny(missing_docs)]

//! # uztruck-fleet — Trucks and Held Documents
//!
//! The fleet side of every deficiency evaluation: the truck registry, the
//! document-type directory, and the documents each truck has on file,
//! together with the derived views built on them (expiry alerts, dashboard
//! statistics).
//!
//! ## Design Principles
//!
//! 1. **Derived expiry state.** A held document stores only its expiry
//!    date. Days-until-expiry, status, and alert level are computed from
//!    an explicit `as_of` date ([`DocumentSnapshot::derive`]) so a stored
//!    figure can never disagree with the calendar.
//!
//! 2. **Explicit join to the requirement catalog.** Each document type
//!    declares which requirement slugs it satisfies
//!    ([`DocumentType::satisfies`]). Matching held documents to
//!    requirements is a keyed join, not a name comparison.
//!
//! 3. **One mutating operation.** The registries are seeded reference
//!    data; the only runtime mutation is document registration
//!    ([`DocumentRegistry::register`]), backed by a `parking_lot::RwLock`
//!    store and an in-memory id sequence.

pub mod alerts;
pub mod document;
pub mod document_type;
pub mod error;
pub mod registry;
pub mod seed;
pub mod stats;
pub mod truck;

pub use alerts::{expiry_alerts, ExpiryAlert, DEFAULT_ALERT_WINDOW_DAYS};
pub use document::{DocumentSnapshot, HeldDocument, NewDocument};
pub use document_type::{DocumentType, TypeCategory, TypeDirectory};
pub use error::FleetError;
pub use registry::{DocumentRegistry, FleetStore, TruckRegistry};
pub use stats::{fleet_stats, DashboardStats};
pub use truck::{Truck, TruckStatus};

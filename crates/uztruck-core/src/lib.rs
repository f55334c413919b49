#![deny(missing_docs)]

//! # uztruck-core — Foundational Types for the UZTRUCK Fleet Stack
//!
//! This crate defines the foundational types that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only `serde`,
//! `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`TruckId`] where a [`RequirementId`]
//!    is expected, and a [`CountryCode`] is validated at construction rather
//!    than carried around as a bare string.
//!
//! 2. **Derived expiry state, never stored.** Days-until-expiry, document
//!    status, and alert level are functions of an expiry date and an explicit
//!    evaluation date ([`days_until_expiry`]). Nothing in this crate reads the
//!    system clock.
//!
//! 3. **Per-currency money discipline.** [`Money`] carries its currency and
//!    [`CostBreakdown`] accumulates totals per currency. Amounts in different
//!    currencies are never added into one figure.
//!
//! 4. **[`ValidationError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod category;
pub mod country;
pub mod error;
pub mod identity;
pub mod money;
pub mod status;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use category::{DocumentCategory, RequirementPriority};
pub use country::CountryCode;
pub use error::ValidationError;
pub use identity::{DocumentId, DocumentTypeId, RequirementId, RouteId, TruckId};
pub use money::{CostBreakdown, CurrencyCode, Money};
pub use status::{AlertLevel, DocumentStatus, CRITICAL_WINDOW_DAYS, EXPIRING_SOON_WINDOW_DAYS};
pub use temporal::{days_until_expiry, parse_date};

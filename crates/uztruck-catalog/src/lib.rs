#![deny(missing_docs)]

//! # uztruck-catalog — Document Requirement Catalog
//!
//! The reference data every deficiency evaluation reads: per-country
//! document requirements for Eurasian freight corridors, the country
//! directory, and field-level validation rules for requirement paperwork.
//!
//! ## Design Principles
//!
//! 1. **Typed `ALL` sentinel.** A requirement is scoped either to one
//!    country or to every destination ([`RequirementScope`]). The sentinel
//!    is a distinct variant, not a magic country code, so it cannot leak
//!    into route definitions — while still serializing as the catalog's
//!    conventional `"country_code": "ALL"`.
//!
//! 2. **De-duplicated selection lookup.** Querying several countries at
//!    once returns each requirement exactly once, keyed by id
//!    ([`RequirementCatalog::requirements_for_selection`]). `ALL`-scoped
//!    entries never multiply with the number of selected countries.
//!
//! 3. **Read-only after seeding.** [`StaticCatalog`] is built once from
//!    the reference data ([`seed`]) and never mutated; evaluations take
//!    snapshots through the [`RequirementCatalog`] trait.

pub mod catalog;
pub mod countries;
pub mod error;
pub mod requirement;
pub mod rules;
pub mod seed;

pub use catalog::{RequirementCatalog, StaticCatalog};
pub use countries::CountryInfo;
pub use error::CatalogError;
pub use requirement::{DocumentRequirement, RequirementScope};
pub use rules::{
    RuleKind, RuleSeverity, ValidationIssue, ValidationReport, ValidationRule, ValidationRuleSet,
};

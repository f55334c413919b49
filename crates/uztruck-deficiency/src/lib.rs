#![deny(missing_docs)]

//! # uztruck-deficiency — Document Deficiency Evaluator
//!
//! Given a truck, a set of destination countries, and an explicit
//! evaluation date, the evaluator cross-references the requirement
//! catalog against the truck's held documents and classifies every
//! requirement as covered or missing, and every covering document as
//! valid or expiring.
//!
//! ## Design Principles
//!
//! 1. **Pure over injected repositories.** [`DeficiencyEvaluator`] reads
//!    through the `RequirementCatalog`, `TruckRegistry`,
//!    `DocumentRegistry`, and `TypeDirectory` traits and performs no I/O
//!    and no mutation. Identical inputs and an identical `as_of` produce
//!    a byte-identical serialized report.
//!
//! 2. **Keyed matching first, name matching last.** A held document
//!    satisfies a requirement through its type's `satisfies` slug list.
//!    The original system's case-insensitive first-token name containment
//!    survives only as [`matching::legacy_name_match`], consulted solely
//!    for document types that carry no slug mapping.
//!
//! 3. **Completion measures coverage.** A requirement covered by an
//!    expiring (or even expired) document still counts as satisfied in
//!    [`DeficiencyReport::completion_percentage`]; renewal urgency is
//!    reported separately through the expiring bucket and
//!    [`DeficiencyReport::deficiency_count`].

pub mod error;
pub mod evaluator;
pub mod matching;
pub mod report;

pub use error::DeficiencyError;
pub use evaluator::{DeficiencyEvaluator, MAX_SELECTION_COUNTRIES};
pub use report::{DeficiencyReport, EvaluatedDocument};

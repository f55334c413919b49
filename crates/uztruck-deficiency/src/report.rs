//! # Deficiency Reports
//!
//! The report is the evaluator's only output: one classified view of one
//! truck against one country selection at one evaluation date. Every
//! field is a pure function of those three inputs, so serializing the
//! same evaluation twice yields byte-identical JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use uztruck_catalog::DocumentRequirement;
use uztruck_core::{CostBreakdown, CountryCode, RequirementId, TruckId};
use uztruck_fleet::DocumentSnapshot;

/// A held document elected to cover one requirement.
///
/// Flattens the snapshot so the wire shape reads as a document annotated
/// with the requirement it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedDocument {
    /// The catalog requirement this document covers.
    pub requirement_id: RequirementId,
    /// The covering document with its expiry state at the evaluation date.
    #[serde(flatten)]
    pub document: DocumentSnapshot,
}

/// The classified outcome of one deficiency evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeficiencyReport {
    /// The evaluated truck.
    pub truck_id: TruckId,
    /// The country selection, sorted and de-duplicated.
    pub countries: Vec<CountryCode>,
    /// The evaluation date every derived figure is relative to.
    pub as_of: NaiveDate,
    /// Everything the selection demands, each requirement exactly once,
    /// ordered by id.
    pub required_documents: Vec<DocumentRequirement>,
    /// Requirements with no covering document on file.
    pub missing_documents: Vec<DocumentRequirement>,
    /// Covering documents inside the 30-day expiry window.
    pub expiring_documents: Vec<EvaluatedDocument>,
    /// Covering documents with more than 30 days of validity.
    pub valid_documents: Vec<EvaluatedDocument>,
    /// Share of requirements covered, rounded to whole percent.
    ///
    /// Coverage, not health: a requirement covered by an expiring or even
    /// expired paper still counts. An empty requirement list is 100.
    pub completion_percentage: u8,
    /// Action items: missing requirements plus expiring documents.
    pub deficiency_count: usize,
    /// Summed processing time to obtain every missing paper.
    pub estimated_completion_time_hours: u32,
    /// Cost of the missing papers, totalled per quoted currency.
    pub total_estimated_cost_by_currency: CostBreakdown,
}

impl DeficiencyReport {
    /// True when the truck can depart with nothing left to do.
    pub fn is_clear(&self) -> bool {
        self.deficiency_count == 0
    }
}

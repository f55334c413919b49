//! # The Deficiency Evaluator
//!
//! Cross-references one truck's papers against everything a country
//! selection demands and classifies the outcome. The evaluator owns no
//! data: it reads through the catalog and registry traits and computes a
//! fresh [`DeficiencyReport`] on every call.
//!
//! ## Classification
//!
//! For each required entry, every held document whose type matches is a
//! candidate; the freshest candidate (most days of validity left, ties
//! broken toward the lower document id) is elected as the cover. A
//! requirement with no candidate is missing. An elected document lands in
//! the expiring or valid bucket by its status at `as_of`; an elected but
//! already expired document covers the requirement without appearing in
//! either bucket. A document elected for several requirements is listed
//! once, under the lowest-id requirement it covers.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;

use uztruck_catalog::RequirementCatalog;
use uztruck_core::{
    days_until_expiry, CostBreakdown, CountryCode, DocumentId, DocumentStatus, TruckId,
};
use uztruck_fleet::{DocumentRegistry, DocumentSnapshot, TruckRegistry, TypeDirectory};

use crate::error::DeficiencyError;
use crate::matching;
use crate::report::{DeficiencyReport, EvaluatedDocument};

/// Largest supported country selection per evaluation.
///
/// A corridor plan touching more countries than this is a client error,
/// not a bigger computation.
pub const MAX_SELECTION_COUNTRIES: usize = 16;

/// Cross-references held documents against the requirement catalog.
#[derive(Clone)]
pub struct DeficiencyEvaluator {
    catalog: Arc<dyn RequirementCatalog>,
    trucks: Arc<dyn TruckRegistry>,
    documents: Arc<dyn DocumentRegistry>,
    types: Arc<dyn TypeDirectory>,
}

impl DeficiencyEvaluator {
    /// Wire an evaluator over the given catalog and registries.
    pub fn new(
        catalog: Arc<dyn RequirementCatalog>,
        trucks: Arc<dyn TruckRegistry>,
        documents: Arc<dyn DocumentRegistry>,
        types: Arc<dyn TypeDirectory>,
    ) -> Self {
        Self {
            catalog,
            trucks,
            documents,
            types,
        }
    }

    /// Evaluate one truck against a country selection at `as_of`.
    ///
    /// # Errors
    ///
    /// [`DeficiencyError::TruckNotFound`] for an unknown truck and
    /// [`DeficiencyError::TooManyCountries`] when the selection exceeds
    /// [`MAX_SELECTION_COUNTRIES`]. An empty selection is valid and yields
    /// a trivially complete report.
    pub fn evaluate(
        &self,
        truck_id: TruckId,
        countries: &BTreeSet<CountryCode>,
        as_of: NaiveDate,
    ) -> Result<DeficiencyReport, DeficiencyError> {
        if countries.len() > MAX_SELECTION_COUNTRIES {
            return Err(DeficiencyError::TooManyCountries {
                given: countries.len(),
                max: MAX_SELECTION_COUNTRIES,
            });
        }
        if self.trucks.get_truck(truck_id).is_none() {
            return Err(DeficiencyError::TruckNotFound { truck_id });
        }

        let required = self.catalog.requirements_for_selection(countries);

        // Held documents paired with their directory types. A document
        // whose type id fails to resolve cannot match anything, so it is
        // dropped here rather than poisoning the evaluation.
        let held: Vec<_> = self
            .documents
            .documents_for(truck_id)
            .into_iter()
            .filter_map(|doc| match self.types.get_type(doc.document_type_id) {
                Some(ty) => Some((doc, ty)),
                None => {
                    tracing::warn!(
                        document_id = %doc.id,
                        type_id = %doc.document_type_id,
                        "held document references an unknown type, skipping"
                    );
                    None
                }
            })
            .collect();

        let mut missing = Vec::new();
        let mut expiring = Vec::new();
        let mut valid = Vec::new();
        let mut listed: HashSet<DocumentId> = HashSet::new();

        for requirement in &required {
            let elected = held
                .iter()
                .filter(|(_, ty)| matching::satisfies(ty, requirement))
                .max_by_key(|(doc, _)| {
                    (days_until_expiry(doc.expiry_date, as_of), Reverse(doc.id))
                });

            let Some((doc, ty)) = elected else {
                missing.push(requirement.clone());
                continue;
            };

            let snapshot = DocumentSnapshot::derive(doc, &ty.name, as_of);
            // An expired cover leaves the requirement off the missing list
            // but earns the document no bucket.
            if snapshot.status == DocumentStatus::Expired {
                continue;
            }
            // A document elected for several requirements is listed once,
            // under the first (lowest-id) requirement it covers.
            if !listed.insert(snapshot.id) {
                continue;
            }
            let entry = EvaluatedDocument {
                requirement_id: requirement.id,
                document: snapshot,
            };
            if entry.document.status == DocumentStatus::ExpiringSoon {
                expiring.push(entry);
            } else {
                valid.push(entry);
            }
        }

        let covered = required.len() - missing.len();
        let completion_percentage = if required.is_empty() {
            100
        } else {
            ((covered * 100) as f64 / required.len() as f64).round() as u8
        };

        let estimated_completion_time_hours =
            missing.iter().map(|r| r.processing_time_hours).sum();
        let mut total_estimated_cost_by_currency = CostBreakdown::new();
        for requirement in &missing {
            total_estimated_cost_by_currency.add(&requirement.estimated_cost);
        }

        let deficiency_count = missing.len() + expiring.len();
        tracing::debug!(
            %truck_id,
            countries = countries.len(),
            required = required.len(),
            missing = missing.len(),
            expiring = expiring.len(),
            valid = valid.len(),
            completion = completion_percentage,
            "deficiency evaluation complete"
        );

        Ok(DeficiencyReport {
            truck_id,
            countries: countries.iter().cloned().collect(),
            as_of,
            required_documents: required,
            missing_documents: missing,
            expiring_documents: expiring,
            valid_documents: valid,
            completion_percentage,
            deficiency_count,
            estimated_completion_time_hours,
            total_estimated_cost_by_currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uztruck_catalog::StaticCatalog;
    use uztruck_core::{CurrencyCode, DocumentTypeId, RequirementId, RequirementPriority};
    use uztruck_fleet::{
        DocumentType, FleetStore, HeldDocument, Truck, TruckStatus, TypeCategory,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn selection(codes: &[&str]) -> BTreeSet<CountryCode> {
        codes.iter().map(|c| CountryCode::new(*c).unwrap()).collect()
    }

    fn evaluator_over(fleet: FleetStore) -> DeficiencyEvaluator {
        DeficiencyEvaluator::new(
            Arc::new(StaticCatalog::eurasian()),
            Arc::new(fleet.clone()),
            Arc::new(fleet.clone()),
            Arc::new(fleet),
        )
    }

    fn seeded_evaluator() -> DeficiencyEvaluator {
        evaluator_over(FleetStore::seeded())
    }

    fn missing_ids(report: &DeficiencyReport) -> Vec<u32> {
        report.missing_documents.iter().map(|r| r.id.as_u32()).collect()
    }

    // -- input validation --

    #[test]
    fn unknown_truck_is_a_hard_error() {
        let err = seeded_evaluator()
            .evaluate(TruckId::new(99), &selection(&["RU"]), date(2024, 5, 27))
            .unwrap_err();
        assert_eq!(err, DeficiencyError::TruckNotFound { truck_id: TruckId::new(99) });
    }

    #[test]
    fn oversized_selection_is_rejected() {
        let too_many: BTreeSet<CountryCode> = (b'A'..=b'Z')
            .take(MAX_SELECTION_COUNTRIES + 1)
            .map(|c| CountryCode::new(format!("A{}", c as char)).unwrap())
            .collect();
        let err = seeded_evaluator()
            .evaluate(TruckId::new(1), &too_many, date(2024, 5, 27))
            .unwrap_err();
        assert_eq!(
            err,
            DeficiencyError::TooManyCountries { given: 17, max: MAX_SELECTION_COUNTRIES }
        );
    }

    #[test]
    fn selection_at_the_cap_is_accepted() {
        let at_cap: BTreeSet<CountryCode> = (b'A'..=b'Z')
            .take(MAX_SELECTION_COUNTRIES)
            .map(|c| CountryCode::new(format!("A{}", c as char)).unwrap())
            .collect();
        assert!(seeded_evaluator()
            .evaluate(TruckId::new(1), &at_cap, date(2024, 5, 27))
            .is_ok());
    }

    #[test]
    fn empty_selection_is_trivially_complete() {
        let report = seeded_evaluator()
            .evaluate(TruckId::new(1), &BTreeSet::new(), date(2024, 5, 27))
            .unwrap();
        assert!(report.required_documents.is_empty());
        assert_eq!(report.completion_percentage, 100);
        assert!(report.is_clear());
        assert!(report.total_estimated_cost_by_currency.is_empty());
    }

    // -- the reference truck against Russia --

    #[test]
    fn truck_one_to_russia_in_spring() {
        // As of 2024-05-27 truck 1 holds: Texnik passport (valid, legacy
        // match on the inspection requirement), registration (matches
        // nothing), OSAGO (expired 2024-02-28), CMR (5 days left).
        let report = seeded_evaluator()
            .evaluate(TruckId::new(1), &selection(&["RU"]), date(2024, 5, 27))
            .unwrap();

        assert_eq!(report.required_documents.len(), 9);
        assert_eq!(missing_ids(&report), vec![1, 2, 3, 6, 13, 14]);

        assert_eq!(report.expiring_documents.len(), 1);
        assert_eq!(report.expiring_documents[0].requirement_id, RequirementId::new(12));
        assert_eq!(report.expiring_documents[0].document.document_number, "CMR-901234");
        assert_eq!(report.expiring_documents[0].document.days_until_expiry, 5);

        assert_eq!(report.valid_documents.len(), 1);
        assert_eq!(report.valid_documents[0].requirement_id, RequirementId::new(4));
        assert_eq!(report.valid_documents[0].document.document_number, "TP-123456");

        // 3 of 9 covered (inspection, expired OSAGO, CMR).
        assert_eq!(report.completion_percentage, 33);
        assert_eq!(report.deficiency_count, 7);
    }

    #[test]
    fn aggregates_cover_missing_requirements_only() {
        let report = seeded_evaluator()
            .evaluate(TruckId::new(1), &selection(&["RU"]), date(2024, 5, 27))
            .unwrap();

        // glonass 168 + freight 720 + euro 240 + intl license 168
        // + green card 24 + fuel 1.
        assert_eq!(report.estimated_completion_time_hours, 1321);

        let costs = &report.total_estimated_cost_by_currency;
        assert_eq!(costs.total_for(&CurrencyCode::new("RUB").unwrap()), 120_000);
        assert_eq!(costs.total_for(&CurrencyCode::new("USD").unwrap()), 500);
        assert_eq!(costs.currency_count(), 2);
    }

    // -- the OSAGO scenarios --

    #[test]
    fn expiring_osago_covers_but_counts_as_deficiency() {
        // 2024-02-10: the OSAGO policy has 18 days left.
        let report = seeded_evaluator()
            .evaluate(TruckId::new(1), &selection(&["RU"]), date(2024, 2, 10))
            .unwrap();

        assert!(!missing_ids(&report).contains(&5));
        let osago = report
            .expiring_documents
            .iter()
            .find(|d| d.requirement_id == RequirementId::new(5))
            .expect("OSAGO should be in the expiring bucket");
        assert_eq!(osago.document.document_number, "INS-345678");
        assert_eq!(osago.document.days_until_expiry, 18);

        // Same coverage as in spring, so the same completion figure; the
        // expiring policy still counts toward the deficiency total.
        assert_eq!(report.completion_percentage, 33);
        assert_eq!(report.deficiency_count, 7);
    }

    #[test]
    fn expired_osago_covers_but_earns_no_bucket() {
        let report = seeded_evaluator()
            .evaluate(TruckId::new(1), &selection(&["RU"]), date(2024, 5, 27))
            .unwrap();

        assert!(!missing_ids(&report).contains(&5));
        let listed_osago = report
            .expiring_documents
            .iter()
            .chain(&report.valid_documents)
            .any(|d| d.requirement_id == RequirementId::new(5));
        assert!(!listed_osago, "an expired cover must appear in neither bucket");
    }

    // -- election --

    fn osago_fleet(documents: Vec<HeldDocument>) -> FleetStore {
        let truck = Truck {
            id: TruckId::new(1),
            license_plate: "01A123BC".to_string(),
            brand: "Mercedes-Benz".to_string(),
            model: "Actros 1845".to_string(),
            year: 2020,
            capacity_tons: 18.5,
            engine_volume: 12.8,
            status: TruckStatus::Active,
        };
        let ty = DocumentType {
            id: DocumentTypeId::new(3),
            name: "Sug'urta polisi".to_string(),
            category: TypeCategory::Mandatory,
            priority: RequirementPriority::High,
            validity_period_months: 12,
            reminder_days: vec![30, 7],
            description: String::new(),
            satisfies: vec!["osago_insurance".to_string()],
        };
        FleetStore::new(vec![truck], vec![ty], documents)
    }

    fn osago_document(id: u32, number: &str, expires: NaiveDate) -> HeldDocument {
        HeldDocument {
            id: uztruck_core::DocumentId::new(id),
            truck_id: TruckId::new(1),
            document_type_id: DocumentTypeId::new(3),
            document_number: number.to_string(),
            issue_date: date(2023, 1, 1),
            expiry_date: expires,
            issuing_authority: "Kafolat sug'urta".to_string(),
        }
    }

    #[test]
    fn freshest_candidate_is_elected() {
        let fleet = osago_fleet(vec![
            osago_document(1, "INS-OLD", date(2024, 3, 1)),
            osago_document(2, "INS-NEW", date(2025, 3, 1)),
        ]);
        let report = evaluator_over(fleet)
            .evaluate(TruckId::new(1), &selection(&["RU"]), date(2024, 2, 1))
            .unwrap();

        let osago = report
            .valid_documents
            .iter()
            .find(|d| d.requirement_id == RequirementId::new(5))
            .expect("the fresh policy should be valid");
        assert_eq!(osago.document.document_number, "INS-NEW");

        // The stale candidate is not reported anywhere.
        let stale_listed = report
            .expiring_documents
            .iter()
            .chain(&report.valid_documents)
            .any(|d| d.document.document_number == "INS-OLD");
        assert!(!stale_listed);
    }

    #[test]
    fn election_tie_breaks_to_the_lower_document_id() {
        let fleet = osago_fleet(vec![
            osago_document(7, "INS-SEVEN", date(2025, 3, 1)),
            osago_document(3, "INS-THREE", date(2025, 3, 1)),
        ]);
        let report = evaluator_over(fleet)
            .evaluate(TruckId::new(1), &selection(&["RU"]), date(2024, 2, 1))
            .unwrap();

        let osago = report
            .valid_documents
            .iter()
            .find(|d| d.requirement_id == RequirementId::new(5))
            .unwrap();
        assert_eq!(osago.document.document_number, "INS-THREE");
    }

    #[test]
    fn a_document_covering_two_requirements_is_listed_once() {
        let fleet_docs = vec![osago_document(1, "INS-COMBI", date(2025, 3, 1))];
        let combi_type = DocumentType {
            id: DocumentTypeId::new(3),
            name: "Kombinatsiyalangan polis".to_string(),
            category: TypeCategory::International,
            priority: RequirementPriority::High,
            validity_period_months: 12,
            reminder_days: vec![30, 7],
            description: String::new(),
            satisfies: vec![
                "osago_insurance".to_string(),
                "international_insurance".to_string(),
            ],
        };
        let truck = Truck {
            id: TruckId::new(1),
            license_plate: "01A123BC".to_string(),
            brand: "Mercedes-Benz".to_string(),
            model: "Actros 1845".to_string(),
            year: 2020,
            capacity_tons: 18.5,
            engine_volume: 12.8,
            status: TruckStatus::Active,
        };
        let fleet = FleetStore::new(vec![truck], vec![combi_type], fleet_docs);
        let report = evaluator_over(fleet)
            .evaluate(TruckId::new(1), &selection(&["RU"]), date(2024, 2, 1))
            .unwrap();

        // Both requirements covered, neither missing.
        assert!(!missing_ids(&report).contains(&5));
        assert!(!missing_ids(&report).contains(&13));

        // The policy appears exactly once, under the lower requirement id.
        let listings: Vec<_> = report
            .valid_documents
            .iter()
            .filter(|d| d.document.document_number == "INS-COMBI")
            .collect();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].requirement_id, RequirementId::new(5));
    }

    // -- completion and corridor math --

    #[test]
    fn truck_two_to_belarus() {
        // Truck 2 holds a valid TIR Carnet; the three ALL-scoped papers
        // are missing.
        let report = seeded_evaluator()
            .evaluate(TruckId::new(2), &selection(&["BY"]), date(2024, 5, 27))
            .unwrap();
        assert_eq!(report.required_documents.len(), 4);
        assert_eq!(missing_ids(&report), vec![12, 13, 14]);
        assert_eq!(report.valid_documents.len(), 1);
        assert_eq!(report.valid_documents[0].requirement_id, RequirementId::new(11));
        assert_eq!(report.completion_percentage, 25);
    }

    #[test]
    fn truck_without_documents_misses_everything() {
        let report = seeded_evaluator()
            .evaluate(TruckId::new(3), &selection(&["RU", "KZ", "BY"]), date(2024, 5, 27))
            .unwrap();
        assert_eq!(report.required_documents.len(), 14);
        assert_eq!(report.missing_documents.len(), 14);
        assert_eq!(report.completion_percentage, 0);
        assert_eq!(report.deficiency_count, 14);
        // Costs stay denominated per currency.
        assert_eq!(report.total_estimated_cost_by_currency.currency_count(), 3);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let evaluator = seeded_evaluator();
        let countries = selection(&["RU", "KZ"]);
        let first = evaluator
            .evaluate(TruckId::new(1), &countries, date(2024, 5, 27))
            .unwrap();
        let second = evaluator
            .evaluate(TruckId::new(1), &countries, date(2024, 5, 27))
            .unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    // -- invariants --

    proptest! {
        #[test]
        fn report_invariants_hold(
            truck in 1u32..=5,
            day_offset in -900i64..900,
            mask in 0usize..64,
        ) {
            let corridor = ["BY", "DE", "KZ", "PL", "RU", "UZ"];
            let countries: BTreeSet<CountryCode> = corridor
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| CountryCode::new(*c).unwrap())
                .collect();
            let as_of = date(2024, 5, 27) + chrono::Duration::days(day_offset);

            let report = seeded_evaluator()
                .evaluate(TruckId::new(truck), &countries, as_of)
                .unwrap();

            // Bucketed requirement ids never overlap with missing ids.
            let missing: BTreeSet<u32> = report
                .missing_documents
                .iter()
                .map(|r| r.id.as_u32())
                .collect();
            let required: BTreeSet<u32> = report
                .required_documents
                .iter()
                .map(|r| r.id.as_u32())
                .collect();
            prop_assert!(missing.is_subset(&required));
            for listed in report.expiring_documents.iter().chain(&report.valid_documents) {
                prop_assert!(required.contains(&listed.requirement_id.as_u32()));
                prop_assert!(!missing.contains(&listed.requirement_id.as_u32()));
            }

            // A document id appears at most once across both buckets.
            let mut seen = BTreeSet::new();
            for listed in report.expiring_documents.iter().chain(&report.valid_documents) {
                prop_assert!(seen.insert(listed.document.id.as_u32()));
            }

            // Buckets never outnumber requirements.
            prop_assert!(
                report.missing_documents.len()
                    + report.expiring_documents.len()
                    + report.valid_documents.len()
                    <= report.required_documents.len()
            );

            prop_assert!(report.completion_percentage <= 100);
            prop_assert_eq!(
                report.deficiency_count,
                report.missing_documents.len() + report.expiring_documents.len()
            );

            // Expiring means inside the window, valid means beyond it.
            for listed in &report.expiring_documents {
                prop_assert!(listed.document.days_until_expiry > 0);
                prop_assert!(listed.document.days_until_expiry <= 30);
            }
            for listed in &report.valid_documents {
                prop_assert!(listed.document.days_until_expiry > 30);
            }
        }
    }
}

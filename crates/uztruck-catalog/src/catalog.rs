//! # Catalog Lookup
//!
//! [`RequirementCatalog`] is the read seam between the reference data and
//! the deficiency evaluator: evaluations depend on the trait, never on the
//! seeded implementation, so tests inject purpose-built catalogs and a
//! persistence-backed implementation can be swapped in later without
//! touching the evaluator.
//!
//! ## Selection Contract
//!
//! `requirements_for_selection` returns each requirement **exactly once**,
//! ordered by id, no matter how many selected countries it applies to.
//! `ALL`-scoped entries in particular appear once per query, not once per
//! country. An empty selection requires nothing.

use std::collections::{BTreeMap, BTreeSet};

use uztruck_core::{CountryCode, RequirementId};

use crate::error::CatalogError;
use crate::requirement::DocumentRequirement;
use crate::seed;

/// Read access to the document requirement catalog.
pub trait RequirementCatalog: Send + Sync {
    /// Every catalog entry, ordered by requirement id.
    fn all(&self) -> Vec<DocumentRequirement>;

    /// Look up a single entry by id.
    fn get(&self, id: RequirementId) -> Option<DocumentRequirement>;

    /// Entries scoped to the given country, plus every `ALL`-scoped entry,
    /// ordered by id.
    fn requirements_for(&self, country: &CountryCode) -> Vec<DocumentRequirement> {
        self.all()
            .into_iter()
            .filter(|r| r.scope.applies_to(country))
            .collect()
    }

    /// Union of `requirements_for` across the selection, de-duplicated by
    /// requirement id and ordered by id. Empty selection yields an empty
    /// list: with no destination picked, nothing is required yet.
    fn requirements_for_selection(
        &self,
        countries: &BTreeSet<CountryCode>,
    ) -> Vec<DocumentRequirement> {
        if countries.is_empty() {
            return Vec::new();
        }
        let mut by_id: BTreeMap<RequirementId, DocumentRequirement> = BTreeMap::new();
        for req in self.all() {
            let applies = req.scope.is_all() || countries.iter().any(|c| req.scope.applies_to(c));
            if applies {
                by_id.entry(req.id).or_insert(req);
            }
        }
        by_id.into_values().collect()
    }
}

/// In-memory catalog, built once from reference data and never mutated.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    entries: BTreeMap<RequirementId, DocumentRequirement>,
}

impl StaticCatalog {
    /// Build a catalog from a list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateRequirementId`] when two entries
    /// share an id; silently keeping one of them would make deficiency
    /// reports depend on seed ordering.
    pub fn new(entries: Vec<DocumentRequirement>) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        for entry in entries {
            let id = entry.id;
            if by_id.insert(id, entry).is_some() {
                return Err(CatalogError::DuplicateRequirementId { id });
            }
        }
        Ok(Self { entries: by_id })
    }

    /// The seeded Eurasian corridor catalog (Russia, Kazakhstan, Belarus,
    /// plus the `ALL`-scoped international papers).
    pub fn eurasian() -> Self {
        Self::new(seed::eurasian_requirements()).expect("reference catalog ids are unique")
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RequirementCatalog for StaticCatalog {
    fn all(&self) -> Vec<DocumentRequirement> {
        self.entries.values().cloned().collect()
    }

    fn get(&self, id: RequirementId) -> Option<DocumentRequirement> {
        self.entries.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cc(code: &str) -> CountryCode {
        CountryCode::new(code).unwrap()
    }

    fn selection(codes: &[&str]) -> BTreeSet<CountryCode> {
        codes.iter().map(|c| cc(c)).collect()
    }

    #[test]
    fn eurasian_catalog_has_fourteen_entries() {
        let catalog = StaticCatalog::eurasian();
        assert_eq!(catalog.len(), 14);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn get_by_id() {
        let catalog = StaticCatalog::eurasian();
        let osago = catalog.get(RequirementId::new(5)).unwrap();
        assert_eq!(osago.document_type, "osago_insurance");
        assert_eq!(osago.display_name, "OSAGO sug'urta polisi");
        assert!(catalog.get(RequirementId::new(999)).is_none());
    }

    #[test]
    fn requirements_for_russia_include_all_scoped() {
        let catalog = StaticCatalog::eurasian();
        let ru = catalog.requirements_for(&cc("RU"));
        // Six Russia-scoped entries plus three ALL-scoped ones.
        assert_eq!(ru.len(), 9);
        assert!(ru.iter().any(|r| r.document_type == "cmr_document"));
        assert!(ru.iter().all(|r| r.scope.is_all() || r.scope.as_str() == "RU"));
    }

    #[test]
    fn requirements_for_country_without_entries_is_all_scoped_only() {
        let catalog = StaticCatalog::eurasian();
        let pl = catalog.requirements_for(&cc("PL"));
        assert_eq!(pl.len(), 3);
        assert!(pl.iter().all(|r| r.scope.is_all()));
    }

    #[test]
    fn selection_deduplicates_all_scoped_entries() {
        let catalog = StaticCatalog::eurasian();
        let reqs = catalog.requirements_for_selection(&selection(&["RU", "KZ", "BY"]));
        // 6 RU + 4 KZ + 1 BY + 3 ALL, each exactly once.
        assert_eq!(reqs.len(), 14);
        let cmr_count = reqs.iter().filter(|r| r.document_type == "cmr_document").count();
        assert_eq!(cmr_count, 1, "ALL-scoped entry must appear exactly once");
    }

    #[test]
    fn selection_is_ordered_by_id() {
        let catalog = StaticCatalog::eurasian();
        let reqs = catalog.requirements_for_selection(&selection(&["KZ", "RU"]));
        let ids: Vec<u32> = reqs.iter().map(|r| r.id.as_u32()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn empty_selection_requires_nothing() {
        let catalog = StaticCatalog::eurasian();
        assert!(catalog.requirements_for_selection(&BTreeSet::new()).is_empty());
    }

    #[test]
    fn selection_matches_union_of_single_country_queries() {
        let catalog = StaticCatalog::eurasian();
        let combined = catalog.requirements_for_selection(&selection(&["RU", "KZ"]));

        let mut expected: BTreeSet<RequirementId> = BTreeSet::new();
        for country in ["RU", "KZ"] {
            for req in catalog.requirements_for(&cc(country)) {
                expected.insert(req.id);
            }
        }
        let got: BTreeSet<RequirementId> = combined.iter().map(|r| r.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn duplicate_ids_fail_construction() {
        let mut entries = seed::eurasian_requirements();
        let mut dup = entries[0].clone();
        dup.display_name = "Boshqa hujjat".to_string();
        entries.push(dup);

        let err = StaticCatalog::new(entries).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRequirementId { .. }));
    }
}

//! # Catalog Errors
//!
//! Structured errors for catalog construction. Lookup misses are expressed
//! as `Option` returns, not errors; only genuinely broken reference data
//! (duplicate identifiers) fails construction.

use thiserror::Error;

use uztruck_core::RequirementId;

/// Errors raised while building a requirement catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two catalog entries share the same requirement id.
    #[error("duplicate requirement id {id} in catalog data")]
    DuplicateRequirementId {
        /// The id that appeared more than once.
        id: RequirementId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_display_names_the_id() {
        let err = CatalogError::DuplicateRequirementId {
            id: RequirementId::new(12),
        };
        assert!(format!("{err}").contains("12"));
    }
}

//! # Document-Type Directory
//!
//! The ten-entry directory of fleet document types. Each type carries a
//! `satisfies` list of requirement slugs — the explicit join key between a
//! held document and the requirement catalog. Types whose `satisfies` list
//! is empty were never mapped; for those the deficiency evaluator falls
//! back to the legacy name matcher.

use serde::{Deserialize, Serialize};
use uztruck_core::{DocumentTypeId, RequirementPriority};

/// Whether a document type is required domestically or only for
/// international trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    /// Required for any operation of the vehicle.
    Mandatory,
    /// Required only on international routes.
    International,
}

impl TypeCategory {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::International => "international",
        }
    }
}

impl std::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directory entry describing one kind of fleet document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    /// Directory identifier.
    pub id: DocumentTypeId,
    /// Operator-facing type name (e.g. `"Sug'urta polisi"`).
    pub name: String,
    /// Domestic or international scope.
    pub category: TypeCategory,
    /// Renewal urgency.
    pub priority: RequirementPriority,
    /// Validity period granted at issuance, in months.
    pub validity_period_months: u32,
    /// Renewal reminder offsets, in days before expiry, descending.
    pub reminder_days: Vec<u32>,
    /// One-line description.
    pub description: String,
    /// Requirement slugs a document of this type satisfies. Empty for
    /// legacy types that were never mapped to the catalog.
    pub satisfies: Vec<String>,
}

impl DocumentType {
    /// Whether a document of this type satisfies the given requirement slug.
    pub fn satisfies_slug(&self, slug: &str) -> bool {
        self.satisfies.iter().any(|s| s == slug)
    }

    /// True when this type has no catalog mapping and must be matched by
    /// the legacy name shim.
    pub fn is_unmapped(&self) -> bool {
        self.satisfies.is_empty()
    }
}

/// Read access to the document-type directory.
pub trait TypeDirectory: Send + Sync {
    /// Look up a type by directory id.
    fn get_type(&self, id: uztruck_core::DocumentTypeId) -> Option<DocumentType>;

    /// Every directory entry, ordered by id.
    fn list_types(&self) -> Vec<DocumentType>;
}

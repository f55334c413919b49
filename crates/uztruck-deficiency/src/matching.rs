//! # Matching Policy
//!
//! Decides whether a held document satisfies a catalog requirement.
//!
//! The primary policy is an explicit join: the document type's
//! `satisfies` list names the requirement slugs it covers. The legacy
//! name matcher below reproduces the original system's loose comparison
//! and is consulted **only** for document types with an empty `satisfies`
//! list — types that predate the slug mapping. It must never be applied
//! to mapped types: widening a mapped type's coverage by name would
//! change which fixtures classify as missing.

use uztruck_catalog::DocumentRequirement;
use uztruck_fleet::DocumentType;

/// Whether a document of the given type satisfies the requirement.
pub fn satisfies(doc_type: &DocumentType, requirement: &DocumentRequirement) -> bool {
    if doc_type.is_unmapped() {
        legacy_name_match(&doc_type.name, requirement)
    } else {
        doc_type.satisfies_slug(&requirement.document_type)
    }
}

/// The original system's matcher, kept as an isolated compatibility shim.
///
/// A held document's type name, lower-cased, must contain the first
/// whitespace-delimited token of the requirement's display name,
/// lower-cased. Deliberately loose — `"Texnik passport"` matches the
/// `"Texnik ko'rik sertifikati"` requirement — and carried forward
/// exactly, looseness included, for unmapped legacy types.
pub fn legacy_name_match(held_type_name: &str, requirement: &DocumentRequirement) -> bool {
    let key = requirement.display_name_key();
    if key.is_empty() {
        return false;
    }
    held_type_name.to_lowercase().contains(&key)
}

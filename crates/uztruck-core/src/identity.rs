//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the UZTRUCK stack.
//! Each identifier is a distinct type — you cannot pass a [`TruckId`] where
//! a [`RequirementId`] is expected.
//!
//! Registry identifiers ([`TruckId`], [`DocumentId`], [`DocumentTypeId`],
//! [`RequirementId`]) wrap the serial integers the reference catalogs use;
//! they are always valid by construction and serialize transparently as
//! bare integers. [`RouteId`] is a string slug validated to be non-empty.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Serial integer identifiers (always valid by construction)
// ---------------------------------------------------------------------------

/// A unique identifier for a truck in the fleet registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TruckId(u32);

impl TruckId {
    /// Wrap a raw registry identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TruckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TruckId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidIdentifier(s.to_string()))
    }
}

/// A unique identifier for a document held on file for a truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(u32);

impl DocumentId {
    /// Wrap a raw registry identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for an entry in the document-type directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentTypeId(u32);

impl DocumentTypeId {
    /// Wrap a raw directory identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DocumentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A unique identifier for a per-country document requirement in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementId(u32);

impl RequirementId {
    /// Wrap a raw catalog identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RequirementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// String identifiers (validated at construction)
// ---------------------------------------------------------------------------

/// A route directory slug (e.g. `"route_1"`).
///
/// # Validation
///
/// Must be non-empty. No further format restrictions are imposed because
/// route naming is operator-defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route identifier from a string, validating non-emptiness.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRouteId`] if the string is empty
    /// or whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::InvalidRouteId);
        }
        Ok(Self(s))
    }

    /// Access the route slug.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

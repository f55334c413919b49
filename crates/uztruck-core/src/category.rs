//! # Requirement Categories and Priorities
//!
//! Exhaustive enums for the functional grouping and operational urgency of
//! catalog requirements. One definition each, matched exhaustively
//! everywhere — no stringly-typed category lists that can diverge.

use serde::{Deserialize, Serialize};

/// Functional grouping of a document requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    /// Vehicle-bound papers (registration, technical certificates).
    Vehicle,
    /// Driver-bound papers (licenses, permits).
    Driver,
    /// Cargo-bound papers (manifests, customs declarations).
    Cargo,
    /// Transit authorization papers (permits, TIR carnets).
    Transit,
    /// Insurance policies.
    Insurance,
    /// Special-regime papers (veterinary, phytosanitary and similar).
    Special,
}

impl DocumentCategory {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Driver => "driver",
            Self::Cargo => "cargo",
            Self::Transit => "transit",
            Self::Insurance => "insurance",
            Self::Special => "special",
        }
    }

    /// All categories, in display order.
    pub fn all() -> &'static [DocumentCategory] {
        &[
            Self::Vehicle,
            Self::Driver,
            Self::Cargo,
            Self::Transit,
            Self::Insurance,
            Self::Special,
        ]
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operational urgency of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementPriority {
    /// Missing it blocks the trip outright (border refusal, fines).
    Critical,
    /// Missing it risks substantial delay or penalties.
    High,
    /// Missing it risks inspection friction.
    Medium,
    /// Advisory; rarely checked.
    Low,
}

impl RequirementPriority {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Sort rank, most urgent first (`critical` = 0).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// All priorities, most urgent first.
    pub fn all() -> &'static [RequirementPriority] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }
}

impl std::fmt::Display for RequirementPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

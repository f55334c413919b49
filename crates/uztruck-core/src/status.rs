//! # Derived Document Status
//!
//! Document status and alert level are pure functions of the signed
//! days-until-expiry figure for a given evaluation date. They are derived
//! on demand and never stored, so a stale snapshot can never disagree with
//! the calendar.
//!
//! Thresholds match the fleet's operating rules: a document inside the
//! 30-day window is renewal work, inside the 7-day window it is an urgent
//! problem, and at or past expiry it is a violation.

use serde::{Deserialize, Serialize};

/// Window (in days) inside which a document counts as expiring soon.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Window (in days) inside which an expiring document is a critical alert.
pub const CRITICAL_WINDOW_DAYS: i64 = 7;

/// Validity state of a held document at a given evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// More than [`EXPIRING_SOON_WINDOW_DAYS`] days of validity remain.
    Valid,
    /// Expires within the renewal window: `0 < days ≤ 30`.
    ExpiringSoon,
    /// Expiry date has passed (`days ≤ 0`).
    Expired,
}

impl DocumentStatus {
    /// Derive the status from a signed days-until-expiry figure.
    pub fn from_days_until_expiry(days: i64) -> Self {
        if days <= 0 {
            Self::Expired
        } else if days <= EXPIRING_SOON_WINDOW_DAYS {
            Self::ExpiringSoon
        } else {
            Self::Valid
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::ExpiringSoon => "expiring_soon",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator-facing urgency classification of a held document.
///
/// Finer-grained than [`DocumentStatus`]: the 30-day renewal window is
/// split into a warning band and a critical band at 7 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    /// More than 30 days remain.
    Safe,
    /// Expires in 8–30 days.
    Warning,
    /// Expires in 1–7 days.
    Critical,
    /// Already expired.
    Expired,
}

impl AlertLevel {
    /// Derive the alert level from a signed days-until-expiry figure.
    pub fn from_days_until_expiry(days: i64) -> Self {
        if days <= 0 {
            Self::Expired
        } else if days <= CRITICAL_WINDOW_DAYS {
            Self::Critical
        } else if days <= EXPIRING_SOON_WINDOW_DAYS {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Expired => "expired",
        }
    }

    /// Sort rank, most urgent first (`expired` = 0).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Expired => 0,
            Self::Critical => 1,
            Self::Warning => 2,
            Self::Safe => 3,
        }
    }

    /// True for the levels that demand immediate operator action.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Critical | Self::Expired)
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

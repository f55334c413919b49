//! # Dashboard Statistics
//!
//! Fleet-wide totals for the operator dashboard. Everything here is
//! computed from the registries for an explicit evaluation date — the
//! per-alert-level document counts in particular are never stored,
//! because they change as the calendar moves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use uztruck_core::{days_until_expiry, AlertLevel};

use crate::registry::{DocumentRegistry, TruckRegistry};
use crate::truck::TruckStatus;

/// Fleet-wide totals at one evaluation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Trucks in the register, any status.
    pub total_trucks: usize,
    /// Trucks with status `active`.
    pub active_trucks: usize,
    /// Trucks with status `maintenance`.
    pub maintenance_trucks: usize,
    /// Trucks with status `inactive`.
    pub inactive_trucks: usize,
    /// Trucks with status `sold`.
    pub sold_trucks: usize,
    /// Documents on file, any state.
    pub total_documents: usize,
    /// Documents already past expiry.
    pub expired_documents: usize,
    /// Documents expiring within the critical 7-day band.
    pub critical_alerts: usize,
    /// Documents expiring in the 8–30 day warning band.
    pub warning_alerts: usize,
    /// Documents with more than 30 days of validity.
    pub safe_documents: usize,
}

/// Compute dashboard totals for the whole fleet at `as_of`.
pub fn fleet_stats(
    trucks: &dyn TruckRegistry,
    documents: &dyn DocumentRegistry,
    as_of: NaiveDate,
) -> DashboardStats {
    let mut stats = DashboardStats::default();

    for truck in trucks.list_trucks() {
        stats.total_trucks += 1;
        match truck.status {
            TruckStatus::Active => stats.active_trucks += 1,
            TruckStatus::Maintenance => stats.maintenance_trucks += 1,
            TruckStatus::Inactive => stats.inactive_trucks += 1,
            TruckStatus::Sold => stats.sold_trucks += 1,
        }
    }

    for doc in documents.list_documents() {
        stats.total_documents += 1;
        let days = days_until_expiry(doc.expiry_date, as_of);
        match AlertLevel::from_days_until_expiry(days) {
            AlertLevel::Expired => stats.expired_documents += 1,
            AlertLevel::Critical => stats.critical_alerts += 1,
            AlertLevel::Warning => stats.warning_alerts += 1,
            AlertLevel::Safe => stats.safe_documents += 1,
        }
    }

    stats
}

//! # Expiry Alerts
//!
//! The computed alert feed: every fleet document inside the renewal
//! window (or already past it), most urgent first. Alerts are a view over
//! the registries for one evaluation date; nothing is stored or sent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use uztruck_core::{days_until_expiry, AlertLevel, DocumentId, TruckId};

use crate::document_type::TypeDirectory;
use crate::registry::{DocumentRegistry, TruckRegistry};

/// Default alert window: the 30-day renewal band.
pub const DEFAULT_ALERT_WINDOW_DAYS: i64 = 30;

/// One document needing operator attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryAlert {
    /// The document the alert concerns.
    pub document_id: DocumentId,
    /// The truck holding the document.
    pub truck_id: TruckId,
    /// The truck's registration plate, for operator listings.
    pub license_plate: String,
    /// Operator-facing name of the document's type.
    pub document_type_name: String,
    /// Serial number printed on the paper.
    pub document_number: String,
    /// Date the paper stops being valid.
    pub expiry_date: NaiveDate,
    /// Signed days from the evaluation date to expiry.
    pub days_until_expiry: i64,
    /// Urgency classification at the evaluation date.
    pub alert_level: AlertLevel,
}

/// Compute the alert feed for the whole fleet at `as_of`.
///
/// Includes every document whose derived days-until-expiry is at most
/// `window_days`, already-expired documents included. Sorted ascending by
/// days (most urgent first), ties by document id.
///
/// A document whose truck or type is missing from the registries is
/// skipped; registration guards against creating such documents, so a
/// skip here means seed data was edited inconsistently.
pub fn expiry_alerts(
    documents: &dyn DocumentRegistry,
    trucks: &dyn TruckRegistry,
    types: &dyn TypeDirectory,
    as_of: NaiveDate,
    window_days: i64,
) -> Vec<ExpiryAlert> {
    let mut alerts: Vec<ExpiryAlert> = documents
        .list_documents()
        .into_iter()
        .filter_map(|doc| {
            let days = days_until_expiry(doc.expiry_date, as_of);
            if days > window_days {
                return None;
            }
            let truck = trucks.get_truck(doc.truck_id)?;
            let ty = types.get_type(doc.document_type_id)?;
            Some(ExpiryAlert {
                document_id: doc.id,
                truck_id: doc.truck_id,
                license_plate: truck.license_plate,
                document_type_name: ty.name,
                document_number: doc.document_number,
                expiry_date: doc.expiry_date,
                days_until_expiry: days,
                alert_level: AlertLevel::from_days_until_expiry(days),
            })
        })
        .collect();

    alerts.sort_by_key(|a| (a.days_until_expiry, a.document_id));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FleetStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Reference fixture dates: documents 2 (2024-12-31), 3 (2024-02-28),
    // 4 (2024-06-01), 6 (2024-09-01) are the interesting ones around
    // mid-2024.

    #[test]
    fn alerts_cover_expired_and_window_documents() {
        let fleet = FleetStore::seeded();
        // As of 2024-05-27: doc 3 expired (-89), doc 4 expires in 5 days.
        let alerts = expiry_alerts(&fleet, &fleet, &fleet, date(2024, 5, 27), 30);
        let ids: Vec<u32> = alerts.iter().map(|a| a.document_id.as_u32()).collect();
        assert_eq!(ids, vec![3, 4]);

        assert_eq!(alerts[0].alert_level, AlertLevel::Expired);
        assert_eq!(alerts[1].days_until_expiry, 5);
        assert_eq!(alerts[1].alert_level, AlertLevel::Critical);
        assert_eq!(alerts[1].license_plate, "01A123BC");
        assert_eq!(alerts[1].document_type_name, "CMR shartnomasi");
    }

    #[test]
    fn alerts_sorted_most_urgent_first() {
        let fleet = FleetStore::seeded();
        // As of 2024-08-29: docs 3 and 4 long expired, doc 6 in 3 days.
        let alerts = expiry_alerts(&fleet, &fleet, &fleet, date(2024, 8, 29), 30);
        let days: Vec<i64> = alerts.iter().map(|a| a.days_until_expiry).collect();
        let mut sorted = days.clone();
        sorted.sort_unstable();
        assert_eq!(days, sorted);
        assert_eq!(alerts.last().unwrap().document_id.as_u32(), 6);
    }

    #[test]
    fn window_widens_the_feed() {
        let fleet = FleetStore::seeded();
        let narrow = expiry_alerts(&fleet, &fleet, &fleet, date(2024, 5, 27), 5);
        let wide = expiry_alerts(&fleet, &fleet, &fleet, date(2024, 5, 27), 365);
        assert!(narrow.len() < wide.len());
        // Everything the narrow window sees, the wide window sees too.
        for alert in &narrow {
            assert!(wide.iter().any(|a| a.document_id == alert.document_id));
        }
    }

    #[test]
    fn quiet_calendar_means_no_alerts() {
        let fleet = FleetStore::seeded();
        // As of 2022-06-01 every seeded document is comfortably valid
        // except those not yet issued; none are within 30 days of expiry.
        let alerts = expiry_alerts(&fleet, &fleet, &fleet, date(2022, 6, 1), 30);
        assert!(alerts.is_empty());
    }
}

//! # Held Documents
//!
//! A [`HeldDocument`] is one paper on file for one truck. It stores the
//! facts of the document (number, dates, issuer); everything the calendar
//! affects is derived on demand into a [`DocumentSnapshot`] for an
//! explicit evaluation date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use uztruck_core::{
    days_until_expiry, AlertLevel, DocumentId, DocumentStatus, DocumentTypeId, TruckId,
};

/// A document on file for a truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldDocument {
    /// Registry identifier.
    pub id: DocumentId,
    /// The truck this document belongs to.
    pub truck_id: TruckId,
    /// Directory id of the document's type.
    pub document_type_id: DocumentTypeId,
    /// Serial number printed on the paper.
    pub document_number: String,
    /// Date of issuance.
    pub issue_date: NaiveDate,
    /// Date the paper stops being valid.
    pub expiry_date: NaiveDate,
    /// Authority that issued the paper.
    pub issuing_authority: String,
}

/// Input for registering a new document; the registry allocates the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    /// The truck the document belongs to.
    pub truck_id: TruckId,
    /// Directory id of the document's type.
    pub document_type_id: DocumentTypeId,
    /// Serial number printed on the paper.
    pub document_number: String,
    /// Date of issuance.
    pub issue_date: NaiveDate,
    /// Date the paper stops being valid.
    pub expiry_date: NaiveDate,
    /// Authority that issued the paper.
    pub issuing_authority: String,
}

/// A held document with its expiry state derived for one evaluation date.
///
/// The derived fields exist only inside a snapshot; they are recomputed on
/// every evaluation and never written back to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    /// Registry identifier.
    pub id: DocumentId,
    /// The truck this document belongs to.
    pub truck_id: TruckId,
    /// Directory id of the document's type.
    pub document_type_id: DocumentTypeId,
    /// Operator-facing name of the document's type.
    pub document_type_name: String,
    /// Serial number printed on the paper.
    pub document_number: String,
    /// Date of issuance.
    pub issue_date: NaiveDate,
    /// Date the paper stops being valid.
    pub expiry_date: NaiveDate,
    /// Authority that issued the paper.
    pub issuing_authority: String,
    /// Signed days from the evaluation date to expiry.
    pub days_until_expiry: i64,
    /// Validity state at the evaluation date.
    pub status: DocumentStatus,
    /// Urgency classification at the evaluation date.
    pub alert_level: AlertLevel,
}

impl DocumentSnapshot {
    /// Derive the snapshot of a held document for the given evaluation date.
    ///
    /// `type_name` comes from the document-type directory; an unknown type
    /// id is the caller's integrity problem and surfaces there, not here.
    pub fn derive(document: &HeldDocument, type_name: &str, as_of: NaiveDate) -> Self {
        let days = days_until_expiry(document.expiry_date, as_of);
        Self {
            id: document.id,
            truck_id: document.truck_id,
            document_type_id: document.document_type_id,
            document_type_name: type_name.to_string(),
            document_number: document.document_number.clone(),
            issue_date: document.issue_date,
            expiry_date: document.expiry_date,
            issuing_authority: document.issuing_authority.clone(),
            days_until_expiry: days,
            status: DocumentStatus::from_days_until_expiry(days),
            alert_level: AlertLevel::from_days_until_expiry(days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cmr_document() -> HeldDocument {
        HeldDocument {
            id: DocumentId::new(4),
            truck_id: TruckId::new(1),
            document_type_id: DocumentTypeId::new(5),
            document_number: "CMR-901234".to_string(),
            issue_date: date(2023, 6, 1),
            expiry_date: date(2024, 6, 1),
            issuing_authority: "Transport-Logistika Uyushmasi".to_string(),
        }
    }

    #[test]
    fn snapshot_derives_days_status_and_alert() {
        let snap = DocumentSnapshot::derive(&cmr_document(), "CMR shartnomasi", date(2024, 5, 27));
        assert_eq!(snap.days_until_expiry, 5);
        assert_eq!(snap.status, DocumentStatus::ExpiringSoon);
        assert_eq!(snap.alert_level, AlertLevel::Critical);
        assert_eq!(snap.document_type_name, "CMR shartnomasi");
    }

    #[test]
    fn snapshot_of_expired_document() {
        let snap = DocumentSnapshot::derive(&cmr_document(), "CMR shartnomasi", date(2024, 6, 16));
        assert_eq!(snap.days_until_expiry, -15);
        assert_eq!(snap.status, DocumentStatus::Expired);
        assert_eq!(snap.alert_level, AlertLevel::Expired);
    }

    #[test]
    fn same_document_different_dates_disagree_only_in_derived_fields() {
        let doc = cmr_document();
        let a = DocumentSnapshot::derive(&doc, "CMR shartnomasi", date(2024, 1, 1));
        let b = DocumentSnapshot::derive(&doc, "CMR shartnomasi", date(2024, 5, 27));
        assert_eq!(a.id, b.id);
        assert_eq!(a.expiry_date, b.expiry_date);
        assert_ne!(a.days_until_expiry, b.days_until_expiry);
    }

    #[test]
    fn snapshot_wire_shape() {
        let snap = DocumentSnapshot::derive(&cmr_document(), "CMR shartnomasi", date(2024, 5, 27));
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["document_number"], "CMR-901234");
        assert_eq!(json["days_until_expiry"], 5);
        assert_eq!(json["status"], "expiring_soon");
        assert_eq!(json["alert_level"], "critical");
        assert_eq!(json["expiry_date"], "2024-06-01");
    }
}

//! # Fleet Reference Data
//!
//! The seeded reference fleet: five trucks, the ten-entry document-type
//! directory, and six documents on file. The `satisfies` lists are the
//! hand-maintained join from fleet document types to requirement catalog
//! slugs; types without an entry predate the mapping and rely on the
//! legacy name matcher.

use chrono::NaiveDate;

use uztruck_core::{DocumentId, DocumentTypeId, RequirementPriority, TruckId};

use crate::document::HeldDocument;
use crate::document_type::{DocumentType, TypeCategory};
use crate::truck::{Truck, TruckStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("BUG: hardcoded date rejected")
}

/// The five-truck reference fleet.
pub fn reference_trucks() -> Vec<Truck> {
    let truck = |id, plate: &str, brand: &str, model: &str, year, capacity, engine, status| Truck {
        id: TruckId::new(id),
        license_plate: plate.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        capacity_tons: capacity,
        engine_volume: engine,
        status,
    };
    vec![
        truck(1, "01A123BC", "Mercedes-Benz", "Actros 1845", 2020, 18.5, 12.8, TruckStatus::Active),
        truck(2, "01B456DE", "Volvo", "FH16", 2019, 20.0, 16.1, TruckStatus::Active),
        truck(3, "01C789FG", "Scania", "R500", 2021, 19.0, 13.0, TruckStatus::Maintenance),
        truck(4, "01D012HI", "MAN", "TGX 18.440", 2018, 18.0, 12.4, TruckStatus::Active),
        truck(5, "01E345JK", "DAF", "XF 106", 2022, 19.5, 12.9, TruckStatus::Inactive),
    ]
}

/// The ten-entry document-type directory.
pub fn reference_document_types() -> Vec<DocumentType> {
    let entry = |id,
                 name: &str,
                 category,
                 priority,
                 months,
                 reminders: &[u32],
                 description: &str,
                 satisfies: &[&str]| DocumentType {
        id: DocumentTypeId::new(id),
        name: name.to_string(),
        category,
        priority,
        validity_period_months: months,
        reminder_days: reminders.to_vec(),
        description: description.to_string(),
        satisfies: satisfies.iter().map(|s| s.to_string()).collect(),
    };
    vec![
        // Domestic registration papers predate the catalog mapping and
        // carry no join slugs.
        entry(
            1,
            "Texnik passport",
            TypeCategory::Mandatory,
            RequirementPriority::Critical,
            60,
            &[90, 30, 15, 7, 3, 1],
            "Yuk mashinasining texnik pasporti",
            &[],
        ),
        entry(
            2,
            "Ro'yxatdan o'tish guvohnomasi",
            TypeCategory::Mandatory,
            RequirementPriority::Critical,
            12,
            &[30, 15, 7, 3, 1],
            "Davlat ro'yxatidan o'tish guvohnomasi",
            &[],
        ),
        entry(
            3,
            "Sug'urta polisi",
            TypeCategory::Mandatory,
            RequirementPriority::High,
            12,
            &[30, 15, 7, 3, 1],
            "Majburiy avtosug'urta polisi",
            &["osago_insurance"],
        ),
        entry(
            4,
            "Texnik ko'rik guvohnomasi",
            TypeCategory::Mandatory,
            RequirementPriority::High,
            12,
            &[30, 15, 7, 3, 1],
            "Texnik holat ko'rik guvohnomasi",
            &["technical_inspection"],
        ),
        entry(
            5,
            "CMR shartnomasi",
            TypeCategory::International,
            RequirementPriority::Critical,
            12,
            &[60, 30, 15, 7, 3, 1],
            "Xalqaro yuk tashish shartnomasi",
            &["cmr_document"],
        ),
        entry(
            6,
            "TIR Carnet",
            TypeCategory::International,
            RequirementPriority::Critical,
            12,
            &[60, 30, 15, 7, 3, 1],
            "Tranzit rejimi hujjati",
            &["tir_carnet"],
        ),
        entry(
            7,
            "Xalqaro haydovchilik guvohnomasi",
            TypeCategory::International,
            RequirementPriority::High,
            60,
            &[90, 30, 15, 7, 3, 1],
            "Xalqaro haydovchilik ruxsatnomasi",
            &["international_license"],
        ),
        entry(
            8,
            "Green Card",
            TypeCategory::International,
            RequirementPriority::High,
            12,
            &[30, 15, 7, 3, 1],
            "Xalqaro sug'urta polisi",
            &["international_insurance"],
        ),
        entry(
            9,
            "ATP guvohnomasi",
            TypeCategory::International,
            RequirementPriority::Medium,
            36,
            &[60, 30, 15, 7],
            "Tez buziladigan mahsulotlar uchun",
            &[],
        ),
        entry(
            10,
            "ADR guvohnomasi",
            TypeCategory::International,
            RequirementPriority::Medium,
            60,
            &[90, 30, 15, 7],
            "Xavfli yuklar tashish uchun",
            &[],
        ),
    ]
}

/// The six documents on file in the reference fleet.
pub fn reference_documents() -> Vec<HeldDocument> {
    let doc = |id,
               truck,
               type_id,
               number: &str,
               issued: NaiveDate,
               expires: NaiveDate,
               authority: &str| HeldDocument {
        id: DocumentId::new(id),
        truck_id: TruckId::new(truck),
        document_type_id: DocumentTypeId::new(type_id),
        document_number: number.to_string(),
        issue_date: issued,
        expiry_date: expires,
        issuing_authority: authority.to_string(),
    };
    vec![
        doc(
            1,
            1,
            1,
            "TP-123456",
            date(2022, 1, 15),
            date(2025, 1, 15),
            "O'zbekiston Respublikasi Transport vazirligi",
        ),
        doc(2, 1, 2, "RG-789012", date(2024, 1, 1), date(2024, 12, 31), "GAI"),
        doc(3, 1, 3, "INS-345678", date(2024, 2, 1), date(2024, 2, 28), "Kafolat sug'urta"),
        doc(
            4,
            1,
            5,
            "CMR-901234",
            date(2023, 6, 1),
            date(2024, 6, 1),
            "Transport-Logistika Uyushmasi",
        ),
        doc(
            5,
            2,
            1,
            "TP-567890",
            date(2021, 8, 15),
            date(2026, 8, 15),
            "O'zbekiston Respublikasi Transport vazirligi",
        ),
        doc(6, 2, 6, "TIR-123789", date(2023, 9, 1), date(2024, 9, 1), "TIR Markazi"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn seeded_tables_have_reference_sizes() {
        assert_eq!(reference_trucks().len(), 5);
        assert_eq!(reference_document_types().len(), 10);
        assert_eq!(reference_documents().len(), 6);
    }

    #[test]
    fn every_document_references_a_seeded_truck_and_type() {
        let trucks: BTreeSet<TruckId> = reference_trucks().iter().map(|t| t.id).collect();
        let types: BTreeSet<DocumentTypeId> =
            reference_document_types().iter().map(|t| t.id).collect();
        for doc in reference_documents() {
            assert!(trucks.contains(&doc.truck_id), "document {} orphaned", doc.id);
            assert!(types.contains(&doc.document_type_id), "document {} untyped", doc.id);
        }
    }

    #[test]
    fn mapped_types_point_at_real_catalog_slugs() {
        // The slugs here must stay in lockstep with the requirement
        // catalog's document_type column.
        let known = [
            "osago_insurance",
            "technical_inspection",
            "cmr_document",
            "tir_carnet",
            "international_license",
            "international_insurance",
        ];
        for ty in reference_document_types() {
            for slug in &ty.satisfies {
                assert!(known.contains(&slug.as_str()), "{} maps to unknown slug {slug}", ty.name);
            }
        }
    }

    #[test]
    fn unmapped_types_are_the_legacy_four() {
        let unmapped: Vec<u32> = reference_document_types()
            .iter()
            .filter(|t| t.is_unmapped())
            .map(|t| t.id.as_u32())
            .collect();
        assert_eq!(unmapped, vec![1, 2, 9, 10]);
    }

    #[test]
    fn issue_dates_precede_expiry_dates() {
        for doc in reference_documents() {
            assert!(doc.issue_date < doc.expiry_date, "document {}", doc.id);
        }
    }
}

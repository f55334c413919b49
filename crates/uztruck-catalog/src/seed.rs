//! # Corridor Reference Data
//!
//! The seeded Eurasian corridor tables: per-country document requirements,
//! the country directory and the field-validation rule table. Amounts are
//! quoted in the issuing country's currency and stay that way; totals are
//! only ever accumulated per currency.

use std::collections::BTreeMap;

use uztruck_core::{
    CountryCode, CurrencyCode, DocumentCategory, Money, RequirementId, RequirementPriority,
};

use crate::countries::CountryInfo;
use crate::requirement::{DocumentRequirement, RequirementScope};
use crate::rules::{RuleKind, RuleSeverity, ValidationRule};

fn country(code: &str) -> RequirementScope {
    RequirementScope::Country(
        CountryCode::new(code).expect("BUG: hardcoded country code rejected"),
    )
}

fn money(amount: u64, code: &str) -> Money {
    Money::new(
        amount,
        CurrencyCode::new(code).expect("BUG: hardcoded currency code rejected"),
    )
}

/// The document requirement catalog for the Tashkent-based corridors:
/// Russia, Kazakhstan and Belarus entries plus the papers every
/// international trip needs regardless of destination.
pub fn eurasian_requirements() -> Vec<DocumentRequirement> {
    vec![
        // -- Russia --
        DocumentRequirement {
            id: RequirementId::new(1),
            scope: country("RU"),
            document_type: "glonass_license".to_string(),
            display_name: "GLONASS/GPS Litsenziya".to_string(),
            description: "GLONASS/GPS tizimi uchun litsenziya".to_string(),
            mandatory: true,
            validity_period_months: Some(12),
            reminder_days_before: vec![90, 30, 15, 7, 3, 1],
            category: DocumentCategory::Vehicle,
            priority: RequirementPriority::Critical,
            processing_time_hours: 168,
            estimated_cost: money(25_000, "RUB"),
            issuing_authority: "Rossiya Transport vazirligi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(2),
            scope: country("RU"),
            document_type: "freight_license".to_string(),
            display_name: "Yuk tashish litsenziyasi".to_string(),
            description: "Rossiyada yuk tashish uchun litsenziya".to_string(),
            mandatory: true,
            validity_period_months: Some(60),
            reminder_days_before: vec![180, 90, 30, 15, 7],
            category: DocumentCategory::Vehicle,
            priority: RequirementPriority::Critical,
            processing_time_hours: 720,
            estimated_cost: money(75_000, "RUB"),
            issuing_authority: "Transport litsenziyalash markazi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(3),
            scope: country("RU"),
            document_type: "euro_certificate".to_string(),
            display_name: "EURO standart sertifikati".to_string(),
            description: "Ekologik standart EURO-4/5 sertifikati".to_string(),
            mandatory: true,
            validity_period_months: Some(60),
            reminder_days_before: vec![180, 90, 30, 15],
            category: DocumentCategory::Vehicle,
            priority: RequirementPriority::High,
            processing_time_hours: 240,
            estimated_cost: money(15_000, "RUB"),
            issuing_authority: "Ekologiya vazirligi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(4),
            scope: country("RU"),
            document_type: "technical_inspection".to_string(),
            display_name: "Texnik ko'rik sertifikati".to_string(),
            description: "Texnik holat bo'yicha ko'rik sertifikati".to_string(),
            mandatory: true,
            validity_period_months: Some(12),
            reminder_days_before: vec![60, 30, 15, 7, 3],
            category: DocumentCategory::Vehicle,
            priority: RequirementPriority::High,
            processing_time_hours: 24,
            estimated_cost: money(8_000, "RUB"),
            issuing_authority: "Avtotexnik ko'rik markazi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(5),
            scope: country("RU"),
            document_type: "osago_insurance".to_string(),
            display_name: "OSAGO sug'urta polisi".to_string(),
            description: "Majburiy avtosug'urta polisi".to_string(),
            mandatory: true,
            validity_period_months: Some(12),
            reminder_days_before: vec![30, 15, 7, 3, 1],
            category: DocumentCategory::Insurance,
            priority: RequirementPriority::Critical,
            processing_time_hours: 2,
            estimated_cost: money(45_000, "RUB"),
            issuing_authority: "Sug'urta kompaniyasi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(6),
            scope: country("RU"),
            document_type: "international_license".to_string(),
            display_name: "Xalqaro haydovchilik guvohnomasi".to_string(),
            description: "Xalqaro haydovchilik litsenziyasi".to_string(),
            mandatory: true,
            validity_period_months: Some(36),
            reminder_days_before: vec![90, 30, 15, 7],
            category: DocumentCategory::Driver,
            priority: RequirementPriority::Critical,
            processing_time_hours: 168,
            estimated_cost: money(5_000, "RUB"),
            issuing_authority: "GAI".to_string(),
        },
        // -- Kazakhstan --
        DocumentRequirement {
            id: RequirementId::new(7),
            scope: country("KZ"),
            document_type: "transit_permit".to_string(),
            display_name: "Tranzit ruxsatnomasi".to_string(),
            description: "Qozog'iston orqali tranzit ruxsatnomasi".to_string(),
            mandatory: true,
            validity_period_months: Some(6),
            reminder_days_before: vec![60, 30, 15, 7, 3],
            category: DocumentCategory::Transit,
            priority: RequirementPriority::Critical,
            processing_time_hours: 72,
            estimated_cost: money(15_000, "KZT"),
            issuing_authority: "Qozog'iston Transport vazirligi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(8),
            scope: country("KZ"),
            document_type: "cargo_manifest".to_string(),
            display_name: "Yuk manifesti".to_string(),
            description: "Yuk ro'yxati va tavsifi".to_string(),
            mandatory: true,
            validity_period_months: Some(1),
            reminder_days_before: vec![15, 7, 3, 1],
            category: DocumentCategory::Cargo,
            priority: RequirementPriority::High,
            processing_time_hours: 12,
            estimated_cost: money(5_000, "KZT"),
            issuing_authority: "Bojxona xizmati".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(9),
            scope: country("KZ"),
            document_type: "customs_declaration".to_string(),
            display_name: "Bojxona deklaratsiyasi".to_string(),
            description: "Yuklar uchun bojxona deklaratsiyasi".to_string(),
            mandatory: true,
            validity_period_months: Some(1),
            reminder_days_before: vec![15, 7, 3, 1],
            category: DocumentCategory::Cargo,
            priority: RequirementPriority::Critical,
            processing_time_hours: 24,
            estimated_cost: money(12_000, "KZT"),
            issuing_authority: "Bojxona qo'mitasi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(10),
            scope: country("KZ"),
            document_type: "veterinary_certificate".to_string(),
            display_name: "Veterinariya sertifikati".to_string(),
            description: "Oziq-ovqat mahsulotlari uchun veterinariya sertifikati".to_string(),
            mandatory: false,
            validity_period_months: Some(1),
            reminder_days_before: vec![15, 7, 3],
            category: DocumentCategory::Special,
            priority: RequirementPriority::Medium,
            processing_time_hours: 48,
            estimated_cost: money(8_000, "KZT"),
            issuing_authority: "Veterinariya xizmati".to_string(),
        },
        // -- Belarus --
        DocumentRequirement {
            id: RequirementId::new(11),
            scope: country("BY"),
            document_type: "tir_carnet".to_string(),
            display_name: "TIR Carnet".to_string(),
            description: "Tranzit rejimi hujjati".to_string(),
            mandatory: true,
            validity_period_months: Some(12),
            reminder_days_before: vec![90, 30, 15, 7],
            category: DocumentCategory::Transit,
            priority: RequirementPriority::Critical,
            processing_time_hours: 168,
            estimated_cost: money(50, "USD"),
            issuing_authority: "TIR markazi".to_string(),
        },
        // -- Every international trip --
        DocumentRequirement {
            id: RequirementId::new(12),
            scope: RequirementScope::AllCountries,
            document_type: "cmr_document".to_string(),
            display_name: "CMR shartnomasi".to_string(),
            description: "Xalqaro yuk tashish shartnomasi".to_string(),
            mandatory: true,
            validity_period_months: Some(12),
            reminder_days_before: vec![60, 30, 15, 7, 3],
            category: DocumentCategory::Cargo,
            priority: RequirementPriority::Critical,
            processing_time_hours: 1,
            estimated_cost: money(10, "USD"),
            issuing_authority: "Transport kompaniyasi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(13),
            scope: RequirementScope::AllCountries,
            document_type: "international_insurance".to_string(),
            display_name: "Xalqaro sug'urta polisi".to_string(),
            description: "Green Card - xalqaro sug'urta".to_string(),
            mandatory: true,
            validity_period_months: Some(12),
            reminder_days_before: vec![30, 15, 7, 3, 1],
            category: DocumentCategory::Insurance,
            priority: RequirementPriority::Critical,
            processing_time_hours: 24,
            estimated_cost: money(500, "USD"),
            issuing_authority: "Sug'urta kompaniyasi".to_string(),
        },
        DocumentRequirement {
            id: RequirementId::new(14),
            scope: RequirementScope::AllCountries,
            document_type: "fuel_documentation".to_string(),
            display_name: "Yoqilg'i xarajatlari hujjati".to_string(),
            description: "Yoqilg'i xarajatlari va to'lovlari hujjatlari".to_string(),
            mandatory: false,
            validity_period_months: Some(1),
            reminder_days_before: vec![15, 7, 3],
            category: DocumentCategory::Vehicle,
            priority: RequirementPriority::Low,
            processing_time_hours: 1,
            estimated_cost: money(0, "USD"),
            issuing_authority: "Yoqilg'i stansiyasi".to_string(),
        },
    ]
}

/// The corridor country directory, ordered by country code.
pub fn eurasian_countries() -> Vec<CountryInfo> {
    let entry = |code: &str, name: &str, name_uz: &str, transit_days, visa_required, info: &str| {
        CountryInfo {
            code: CountryCode::new(code).expect("BUG: hardcoded country code rejected"),
            name: name.to_string(),
            name_uz: name_uz.to_string(),
            transit_days,
            visa_required,
            additional_info: info.to_string(),
        }
    };
    vec![
        entry("BY", "Belarus", "Belarus", 2, false, "Tranzit ruxsat talab qilinadi"),
        entry("DE", "Germany", "Germaniya", 3, false, "To'lov qurilmasi majburiy"),
        entry(
            "KZ",
            "Kazakhstan",
            "Qozog'iston",
            3,
            false,
            "Tranzit ruxsat va sug'urta talab qilinadi",
        ),
        entry("PL", "Poland", "Polsha", 5, false, "Yevropa Ittifoqi talablari"),
        entry(
            "RU",
            "Russia",
            "Rossiya",
            7,
            true,
            "Viza, CMR va xalqaro litsenziya majburiy",
        ),
        entry("UZ", "Uzbekistan", "O'zbekiston", 0, false, "Bosh davlat"),
    ]
}

/// The field-validation rule table, keyed by requirement slug.
pub fn eurasian_validation_rules() -> BTreeMap<String, Vec<ValidationRule>> {
    let mut table = BTreeMap::new();
    table.insert(
        "glonass_license".to_string(),
        vec![
            ValidationRule {
                field: "license_number".to_string(),
                kind: RuleKind::Required,
                message: "Litsenziya raqami kiritilishi shart".to_string(),
                severity: RuleSeverity::Error,
            },
            ValidationRule {
                field: "vehicle_vin".to_string(),
                kind: RuleKind::Pattern {
                    pattern: "^[A-HJ-NPR-Z0-9]{17}$".to_string(),
                },
                message: "VIN raqam 17 ta belgi bo'lishi kerak".to_string(),
                severity: RuleSeverity::Error,
            },
            ValidationRule {
                field: "expiry_date".to_string(),
                kind: RuleKind::Date,
                message: "Amal qilish muddati to'g'ri formatda bo'lishi kerak".to_string(),
                severity: RuleSeverity::Error,
            },
        ],
    );
    table.insert(
        "transit_permit".to_string(),
        vec![
            ValidationRule {
                field: "permit_number".to_string(),
                kind: RuleKind::Required,
                message: "Ruxsatnoma raqami kiritilishi shart".to_string(),
                severity: RuleSeverity::Error,
            },
            ValidationRule {
                field: "route_details".to_string(),
                kind: RuleKind::Required,
                message: "Marshrut ma'lumotlari kiritilishi shart".to_string(),
                severity: RuleSeverity::Error,
            },
            ValidationRule {
                field: "cargo_weight".to_string(),
                kind: RuleKind::Pattern {
                    pattern: r"^[0-9]+(\.[0-9]+)?$".to_string(),
                },
                message: "Yuk og'irligi raqam formatida bo'lishi kerak".to_string(),
                severity: RuleSeverity::Warning,
            },
        ],
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_partition_the_catalog() {
        let reqs = eurasian_requirements();
        let count = |code: &str| {
            reqs.iter()
                .filter(|r| matches!(&r.scope, RequirementScope::Country(c) if c.as_str() == code))
                .count()
        };
        assert_eq!(count("RU"), 6);
        assert_eq!(count("KZ"), 4);
        assert_eq!(count("BY"), 1);
        assert_eq!(reqs.iter().filter(|r| r.scope.is_all()).count(), 3);
        assert_eq!(reqs.len(), 14);
    }

    #[test]
    fn costs_are_denominated_locally() {
        for req in eurasian_requirements() {
            let expected = match &req.scope {
                RequirementScope::Country(c) if c.as_str() == "RU" => "RUB",
                RequirementScope::Country(c) if c.as_str() == "KZ" => "KZT",
                _ => "USD",
            };
            assert_eq!(
                req.estimated_cost.currency.as_str(),
                expected,
                "{} quoted in the wrong currency",
                req.document_type
            );
        }
    }

    #[test]
    fn optional_papers_are_flagged() {
        let reqs = eurasian_requirements();
        let optional: Vec<&str> = reqs
            .iter()
            .filter(|r| !r.mandatory)
            .map(|r| r.document_type.as_str())
            .collect();
        assert_eq!(optional, ["veterinary_certificate", "fuel_documentation"]);
    }

    #[test]
    fn reminder_cadence_counts_down() {
        for req in eurasian_requirements() {
            let days = &req.reminder_days_before;
            assert!(
                days.windows(2).all(|w| w[0] > w[1]),
                "{} reminders are not strictly decreasing",
                req.document_type
            );
        }
    }

    #[test]
    fn every_slug_is_unique() {
        let reqs = eurasian_requirements();
        let mut slugs: Vec<&str> = reqs.iter().map(|r| r.document_type.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), reqs.len());
    }
}

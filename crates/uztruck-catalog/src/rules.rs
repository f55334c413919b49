//! # Document Field Validation
//!
//! Per-document-type field rules: the paper checks an operator runs before
//! submitting a registration, expressed as data so the rule table can grow
//! without code changes.
//!
//! ## Rule Kinds
//!
//! 1. **required**: the field is present and non-empty.
//! 2. **date**: the field parses as an ISO 8601 calendar date.
//! 3. **pattern** (alias `format`): the field matches an anchored regex.
//! 4. **length**: the field's character count is within bounds.
//!
//! Only `required` fires on an absent field; the other kinds check a value
//! that is actually there. Field values arrive as strings, so numeric
//! checks are written as patterns. A rule set never panics: a pattern that
//! fails to compile is reported as an error on its field.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uztruck_core::temporal;

use crate::seed;

// ---------------------------------------------------------------------------
// Rule Model
// ---------------------------------------------------------------------------

/// How a failed rule affects the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSeverity {
    /// Failure makes the submission invalid.
    Error,
    /// Failure is surfaced but does not block submission.
    Warning,
}

impl RuleSeverity {
    /// Canonical snake_case form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The check a rule performs on its field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Field must be present and non-empty.
    Required,
    /// Field must parse as a `YYYY-MM-DD` calendar date.
    Date,
    /// Field must match an anchored regular expression.
    ///
    /// Accepts the legacy `format` spelling on the wire; both kinds always
    /// carried the same regex payload.
    #[serde(alias = "format")]
    Pattern {
        /// Anchored regex source, e.g. the 17-character VIN class.
        pattern: String,
    },
    /// Field length in characters must be within bounds.
    Length {
        /// Inclusive minimum, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        min_length: Option<usize>,
        /// Inclusive maximum, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
}

/// A single field rule attached to a requirement slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    /// Submission field the rule inspects.
    pub field: String,
    /// The check to perform.
    #[serde(flatten)]
    pub kind: RuleKind,
    /// Operator-facing message shown when the rule fails.
    pub message: String,
    /// Whether failure blocks the submission.
    pub severity: RuleSeverity,
}

// ---------------------------------------------------------------------------
// Validation Report
// ---------------------------------------------------------------------------

/// A single failed rule, attributed to its field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field the issue concerns.
    pub field: String,
    /// Operator-facing message.
    pub message: String,
    /// Severity the issue was raised at.
    pub severity: RuleSeverity,
}

/// Outcome of running a slug's rules against submitted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the submission passed every error-severity rule.
    pub is_valid: bool,
    /// Error-severity issues.
    pub errors: Vec<ValidationIssue>,
    /// Warning-severity issues (non-fatal).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create a passing report with no issues.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error-severity issue. Marks the report invalid.
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.is_valid = false;
        self.errors.push(issue);
    }

    /// Add a warning-severity issue (does not affect validity).
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }
}

// ---------------------------------------------------------------------------
// Rule Evaluation
// ---------------------------------------------------------------------------

/// Field rules grouped by requirement slug.
#[derive(Debug, Clone)]
pub struct ValidationRuleSet {
    rules: BTreeMap<String, Vec<ValidationRule>>,
}

impl ValidationRuleSet {
    /// Build a rule set from a slug-keyed table.
    pub fn new(rules: BTreeMap<String, Vec<ValidationRule>>) -> Self {
        Self { rules }
    }

    /// The seeded Eurasian corridor rule table.
    pub fn eurasian() -> Self {
        Self::new(seed::eurasian_validation_rules())
    }

    /// Rules registered for a slug. Unknown slugs have no rules.
    pub fn rules_for(&self, slug: &str) -> &[ValidationRule] {
        self.rules.get(slug).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Run every rule for `slug` against the submitted fields.
    ///
    /// A slug with no registered rules validates trivially: the rule table
    /// gates known document types, it does not reject unknown ones.
    pub fn validate(&self, slug: &str, fields: &BTreeMap<String, String>) -> ValidationReport {
        let mut report = ValidationReport::ok();

        for rule in self.rules_for(slug) {
            let value = fields.get(&rule.field).map(String::as_str).unwrap_or("");
            let value = value.trim();

            match &rule.kind {
                RuleKind::Required => {
                    if value.is_empty() {
                        push_issue(&mut report, rule);
                    }
                }
                // Value-shape rules only fire on a value that is present;
                // absence is the `required` rule's concern.
                RuleKind::Date => {
                    if !value.is_empty() && temporal::parse_date(value).is_err() {
                        push_issue(&mut report, rule);
                    }
                }
                RuleKind::Pattern { pattern } => {
                    if value.is_empty() {
                        continue;
                    }
                    match Regex::new(pattern) {
                        Ok(re) => {
                            if !re.is_match(value) {
                                push_issue(&mut report, rule);
                            }
                        }
                        Err(err) => {
                            report.add_error(ValidationIssue {
                                field: rule.field.clone(),
                                message: format!("validation pattern does not compile: {err}"),
                                severity: RuleSeverity::Error,
                            });
                        }
                    }
                }
                RuleKind::Length {
                    min_length,
                    max_length,
                } => {
                    if value.is_empty() {
                        continue;
                    }
                    let len = value.chars().count();
                    let too_short = min_length.is_some_and(|min| len < min);
                    let too_long = max_length.is_some_and(|max| len > max);
                    if too_short || too_long {
                        push_issue(&mut report, rule);
                    }
                }
            }
        }

        report
    }
}

fn push_issue(report: &mut ValidationReport, rule: &ValidationRule) {
    let issue = ValidationIssue {
        field: rule.field.clone(),
        message: rule.message.clone(),
        severity: rule.severity,
    };
    match rule.severity {
        RuleSeverity::Error => report.add_error(issue),
        RuleSeverity::Warning => report.add_warning(issue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_report_ok() {
        let report = ValidationReport::ok();
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_add_error_marks_invalid() {
        let mut report = ValidationReport::ok();
        report.add_error(ValidationIssue {
            field: "license_number".to_string(),
            message: "kiritilishi shart".to_string(),
            severity: RuleSeverity::Error,
        });
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_warning_does_not_invalidate() {
        let mut report = ValidationReport::ok();
        report.add_warning(ValidationIssue {
            field: "cargo_weight".to_string(),
            message: "raqam formatida".to_string(),
            severity: RuleSeverity::Warning,
        });
        assert!(report.is_valid);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_required_rejects_missing_and_blank() {
        let rules = ValidationRuleSet::eurasian();

        let report = rules.validate("glonass_license", &fields(&[]));
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.field == "license_number"));

        let report = rules.validate("glonass_license", &fields(&[("license_number", "   ")]));
        assert!(!report.is_valid);
    }

    #[test]
    fn test_vin_pattern() {
        let rules = ValidationRuleSet::eurasian();
        let ok = fields(&[
            ("license_number", "GL-2024-001"),
            ("vehicle_vin", "WDB9634031L123456"),
            ("expiry_date", "2027-01-15"),
        ]);
        assert!(rules.validate("glonass_license", &ok).is_valid);

        // VIN alphabet excludes I, O and Q.
        let bad = fields(&[
            ("license_number", "GL-2024-001"),
            ("vehicle_vin", "WDB9634031L12345O"),
        ]);
        let report = rules.validate("glonass_license", &bad);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.field == "vehicle_vin"));
    }

    #[test]
    fn test_date_rule_rejects_malformed() {
        let rules = ValidationRuleSet::eurasian();
        let bad = fields(&[
            ("license_number", "GL-2024-001"),
            ("expiry_date", "15.01.2027"),
        ]);
        let report = rules.validate("glonass_license", &bad);
        assert!(!report.is_valid);
        assert!(report.errors.iter().any(|e| e.field == "expiry_date"));
    }

    #[test]
    fn test_shape_rules_skip_absent_fields() {
        let rules = ValidationRuleSet::eurasian();
        // vehicle_vin and expiry_date are absent but not required; only the
        // missing license_number fails.
        let report = rules.validate("glonass_license", &fields(&[]));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "license_number");
    }

    #[test]
    fn test_cargo_weight_is_warning_only() {
        let rules = ValidationRuleSet::eurasian();
        let submitted = fields(&[
            ("permit_number", "TR-556677"),
            ("route_details", "Toshkent - Almati - Moskva"),
            ("cargo_weight", "oq bug'doy"),
        ]);
        let report = rules.validate("transit_permit", &submitted);
        assert!(report.is_valid, "weight format is advisory");
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, "cargo_weight");

        let decimal = fields(&[
            ("permit_number", "TR-556677"),
            ("route_details", "Toshkent - Almati - Moskva"),
            ("cargo_weight", "18.5"),
        ]);
        let report = rules.validate("transit_permit", &decimal);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unknown_slug_validates_trivially() {
        let rules = ValidationRuleSet::eurasian();
        let report = rules.validate("fuel_documentation", &fields(&[]));
        assert!(report.is_valid);
        assert!(report.errors.is_empty() && report.warnings.is_empty());
    }

    #[test]
    fn test_length_bounds() {
        let mut table = BTreeMap::new();
        table.insert(
            "test_doc".to_string(),
            vec![ValidationRule {
                field: "permit_number".to_string(),
                kind: RuleKind::Length {
                    min_length: Some(5),
                    max_length: Some(12),
                },
                message: "5 dan 12 gacha belgi".to_string(),
                severity: RuleSeverity::Error,
            }],
        );
        let rules = ValidationRuleSet::new(table);

        assert!(rules.validate("test_doc", &fields(&[("permit_number", "TR-55")])).is_valid);
        assert!(!rules.validate("test_doc", &fields(&[("permit_number", "TR")])).is_valid);
        assert!(!rules
            .validate("test_doc", &fields(&[("permit_number", "TR-5566778899001")]))
            .is_valid);
        // Absent value is the required rule's concern.
        assert!(rules.validate("test_doc", &fields(&[])).is_valid);
    }

    #[test]
    fn test_uncompilable_pattern_reports_error() {
        let mut table = BTreeMap::new();
        table.insert(
            "test_doc".to_string(),
            vec![ValidationRule {
                field: "serial".to_string(),
                kind: RuleKind::Pattern {
                    pattern: "[unclosed".to_string(),
                },
                message: "seriya formati".to_string(),
                severity: RuleSeverity::Warning,
            }],
        );
        let rules = ValidationRuleSet::new(table);

        let report = rules.validate("test_doc", &fields(&[("serial", "AB123")]));
        assert!(!report.is_valid, "broken pattern must not pass silently");
        assert_eq!(report.errors[0].field, "serial");
        assert!(report.errors[0].message.contains("does not compile"));
    }

    #[test]
    fn test_rule_wire_shape() {
        let rule = ValidationRule {
            field: "vehicle_vin".to_string(),
            kind: RuleKind::Pattern {
                pattern: "^[A-HJ-NPR-Z0-9]{17}$".to_string(),
            },
            message: "VIN raqam 17 ta belgi bo'lishi kerak".to_string(),
            severity: RuleSeverity::Error,
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["kind"], "pattern");
        assert_eq!(json["field"], "vehicle_vin");
        assert_eq!(json["severity"], "error");
    }

    #[test]
    fn test_format_spelling_accepted() {
        let json = serde_json::json!({
            "field": "vehicle_vin",
            "kind": "format",
            "pattern": "^[A-HJ-NPR-Z0-9]{17}$",
            "message": "VIN raqam 17 ta belgi bo'lishi kerak",
            "severity": "error"
        });
        let rule: ValidationRule = serde_json::from_value(json).unwrap();
        assert!(matches!(rule.kind, RuleKind::Pattern { .. }));
    }

    #[test]
    fn test_eurasian_rule_table_coverage() {
        let rules = ValidationRuleSet::eurasian();
        assert_eq!(rules.rules_for("glonass_license").len(), 3);
        assert_eq!(rules.rules_for("transit_permit").len(), 3);
        assert!(rules.rules_for("cmr_document").is_empty());
    }
}

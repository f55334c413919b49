//! # Check Subcommands
//!
//! `uztruck check` evaluates a truck against a country selection;
//! `uztruck route-check` evaluates against a corridor route's transit
//! countries. Both print the deficiency report and exit 0 when the truck
//! is clear, 1 when deficiencies exist.

use anyhow::{bail, Result};
use clap::Args;

use uztruck_core::{RouteId, TruckId};
use uztruck_deficiency::DeficiencyReport;
use uztruck_routes::RouteDirectory;

use crate::{parse_countries, resolve_as_of, Context};

/// Arguments for `uztruck check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Truck id from the fleet register.
    #[arg(long)]
    pub truck: u32,

    /// Destination and transit countries, e.g. `RU,KZ`.
    #[arg(long, value_delimiter = ',', required = true)]
    pub countries: Vec<String>,

    /// Evaluation date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Print the serialized report instead of the human summary.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `uztruck route-check`.
#[derive(Args, Debug)]
pub struct RouteCheckArgs {
    /// Route slug, e.g. `route_1`.
    #[arg(long)]
    pub route: String,

    /// Truck id from the fleet register.
    #[arg(long)]
    pub truck: u32,

    /// Evaluation date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Print the serialized report instead of the human summary.
    #[arg(long)]
    pub json: bool,
}

/// Execute `uztruck check`.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let ctx = Context::seeded();
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let countries = parse_countries(&args.countries)?;
    let report = ctx
        .evaluator
        .evaluate(TruckId::new(args.truck), &countries, as_of)?;
    emit(&report, args.json)?;
    Ok(exit_code(&report))
}

/// Execute `uztruck route-check`.
pub fn run_route_check(args: &RouteCheckArgs) -> Result<u8> {
    let ctx = Context::seeded();
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let route_id = RouteId::new(args.route.as_str())?;
    let Some(route) = ctx.routes.get(&route_id) else {
        bail!("route {route_id} not found");
    };
    let report = ctx.evaluator.evaluate(
        TruckId::new(args.truck),
        &route.country_set(),
        as_of,
    )?;
    if !args.json {
        println!("Route: {} ({})", route.name, route_id);
    }
    emit(&report, args.json)?;
    Ok(exit_code(&report))
}

fn exit_code(report: &DeficiencyReport) -> u8 {
    if report.is_clear() {
        0
    } else {
        1
    }
}

fn emit(report: &DeficiencyReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

/// Render a deficiency report the way the operator dashboard presents it.
pub fn render_report(report: &DeficiencyReport) -> String {
    use std::fmt::Write;

    let countries: Vec<&str> = report.countries.iter().map(|c| c.as_str()).collect();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Deficiency report for truck {} ({}) as of {}",
        report.truck_id,
        countries.join(", "),
        report.as_of
    );
    let _ = writeln!(
        out,
        "Completion: {}% ({} of {} requirements covered)",
        report.completion_percentage,
        report.required_documents.len() - report.missing_documents.len(),
        report.required_documents.len()
    );

    if !report.missing_documents.is_empty() {
        let _ = writeln!(out, "Missing ({}):", report.missing_documents.len());
        for req in &report.missing_documents {
            let _ = writeln!(
                out,
                "  - [{}] {} (processing {}, {} {})",
                req.scope.as_str(),
                req.display_name,
                format_processing_time(req.processing_time_hours),
                req.estimated_cost.amount,
                req.estimated_cost.currency.as_str()
            );
        }
    }
    if !report.expiring_documents.is_empty() {
        let _ = writeln!(out, "Expiring soon ({}):", report.expiring_documents.len());
        for entry in &report.expiring_documents {
            let _ = writeln!(
                out,
                "  - {} {} expires {} ({} days left)",
                entry.document.document_number,
                entry.document.document_type_name,
                entry.document.expiry_date,
                entry.document.days_until_expiry
            );
        }
    }
    if !report.valid_documents.is_empty() {
        let _ = writeln!(out, "Valid ({}):", report.valid_documents.len());
        for entry in &report.valid_documents {
            let _ = writeln!(
                out,
                "  - {} {} valid until {}",
                entry.document.document_number,
                entry.document.document_type_name,
                entry.document.expiry_date
            );
        }
    }

    if report.is_clear() {
        let _ = writeln!(out, "No deficiencies.");
    } else {
        let _ = writeln!(
            out,
            "Estimated completion time: {}",
            format_processing_time(report.estimated_completion_time_hours)
        );
        if !report.total_estimated_cost_by_currency.is_empty() {
            let costs: Vec<String> = report
                .total_estimated_cost_by_currency
                .iter()
                .map(|(currency, amount)| format!("{amount} {}", currency.as_str()))
                .collect();
            let _ = writeln!(out, "Estimated cost: {}", costs.join(", "));
        }
    }
    out
}

/// Hours under a day print as hours, anything longer as whole days
/// rounded up.
pub fn format_processing_time(hours: u32) -> String {
    if hours < 24 {
        format!("{hours} h")
    } else {
        format!("{} days", hours.div_ceil(24))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_for(truck: u32, countries: &[&str], as_of: &str) -> DeficiencyReport {
        let ctx = Context::seeded();
        let selection = parse_countries(
            &countries.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
        )
        .unwrap();
        ctx.evaluator
            .evaluate(
                TruckId::new(truck),
                &selection,
                uztruck_core::parse_date(as_of).unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn processing_time_switches_to_days_at_24_hours() {
        assert_eq!(format_processing_time(1), "1 h");
        assert_eq!(format_processing_time(23), "23 h");
        assert_eq!(format_processing_time(24), "1 days");
        assert_eq!(format_processing_time(1321), "56 days");
    }

    #[test]
    fn rendered_report_lists_every_bucket() {
        let report = report_for(1, &["RU"], "2024-05-27");
        let text = render_report(&report);
        assert!(text.contains("Completion: 33% (3 of 9 requirements covered)"));
        assert!(text.contains("Missing (6):"));
        assert!(text.contains("Expiring soon (1):"));
        assert!(text.contains("CMR-901234"));
        assert!(text.contains("Valid (1):"));
        assert!(text.contains("Estimated cost: 120000 RUB, 500 USD"));
    }

    #[test]
    fn clear_report_renders_no_deficiencies() {
        let report = report_for(1, &[], "2024-05-27");
        let text = render_report(&report);
        assert!(text.contains("Completion: 100%"));
        assert!(text.contains("No deficiencies."));
        assert!(!text.contains("Estimated cost"));
    }

    #[test]
    fn check_exit_codes_follow_the_report() {
        let deficient = CheckArgs {
            truck: 1,
            countries: vec!["RU".into()],
            as_of: Some("2024-05-27".into()),
            json: true,
        };
        assert_eq!(run_check(&deficient).unwrap(), 1);

        // An unknown truck is an operational error, not a deficiency.
        let missing_truck = CheckArgs {
            truck: 99,
            ..deficient
        };
        assert!(run_check(&missing_truck).is_err());
    }

    #[test]
    fn route_check_resolves_the_route_countries() {
        let args = RouteCheckArgs {
            route: "route_1".into(),
            truck: 3,
            as_of: Some("2024-05-27".into()),
            json: true,
        };
        assert_eq!(run_route_check(&args).unwrap(), 1);

        let unknown = RouteCheckArgs {
            route: "route_99".into(),
            truck: 3,
            as_of: Some("2024-05-27".into()),
            json: true,
        };
        assert!(run_route_check(&unknown).is_err());
    }
}

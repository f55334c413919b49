//! # Reference Directory Subcommands
//!
//! Read-only lookups over the seeded reference data: the requirement
//! catalog (`uztruck requirements`) and the corridor route directory
//! (`uztruck routes`).

use anyhow::{Context as _, Result};
use clap::Args;

use uztruck_catalog::RequirementCatalog;
use uztruck_core::CountryCode;
use uztruck_routes::RouteDirectory;

use crate::check::format_processing_time;
use crate::Context;

/// Arguments for `uztruck requirements`.
#[derive(Args, Debug)]
pub struct RequirementsArgs {
    /// Restrict to one country's requirements (plus the `ALL`-scoped
    /// international papers).
    #[arg(long)]
    pub country: Option<String>,

    /// Print the serialized catalog entries.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `uztruck routes`.
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Print the serialized route directory.
    #[arg(long)]
    pub json: bool,
}

/// Execute `uztruck requirements`.
pub fn run_requirements(args: &RequirementsArgs) -> Result<u8> {
    let ctx = Context::seeded();
    let entries = match &args.country {
        Some(raw) => {
            let country = CountryCode::new(raw.as_str()).context("invalid --country value")?;
            ctx.catalog.requirements_for(&country)
        }
        None => ctx.catalog.all(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(0);
    }

    for req in &entries {
        println!(
            "{:>3}  [{:>3}] {} (processing {}, {} {})",
            req.id,
            req.scope.as_str(),
            req.display_name,
            format_processing_time(req.processing_time_hours),
            req.estimated_cost.amount,
            req.estimated_cost.currency.as_str()
        );
    }
    println!("{} requirements", entries.len());
    Ok(0)
}

/// Execute `uztruck routes`.
pub fn run_routes(args: &RoutesArgs) -> Result<u8> {
    let ctx = Context::seeded();
    let routes = ctx.routes.list();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(0);
    }

    for route in &routes {
        let countries: Vec<&str> = route.countries.iter().map(|c| c.as_str()).collect();
        println!(
            "{}  {} ({} km, ~{} h, {}): {}",
            route.id,
            route.name,
            route.distance_km,
            route.estimated_duration_hours,
            route.difficulty.as_str(),
            countries.join(" > ")
        );
    }
    println!("{} routes", routes.len());
    Ok(0)
}

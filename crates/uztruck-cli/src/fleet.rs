//! # Fleet Subcommands
//!
//! Views over the fleet store: the truck register (`uztruck fleet`), one
//! truck's papers with derived expiry state (`uztruck documents`), and
//! fleet-wide expiry alerts (`uztruck alerts`).

use anyhow::{bail, Result};
use clap::Args;

use uztruck_core::TruckId;
use uztruck_fleet::{
    expiry_alerts, DocumentSnapshot, DocumentRegistry, TruckRegistry, TypeDirectory,
    DEFAULT_ALERT_WINDOW_DAYS,
};

use crate::{resolve_as_of, Context};

/// Arguments for `uztruck fleet`.
#[derive(Args, Debug)]
pub struct FleetArgs {
    /// Print the serialized truck register.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `uztruck documents`.
#[derive(Args, Debug)]
pub struct DocumentsArgs {
    /// Truck id from the fleet register.
    #[arg(long)]
    pub truck: u32,

    /// Evaluation date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Print the serialized document snapshots.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `uztruck alerts`.
#[derive(Args, Debug)]
pub struct AlertsArgs {
    /// Look-ahead window in days. Expired documents are always included.
    #[arg(long, default_value_t = DEFAULT_ALERT_WINDOW_DAYS)]
    pub within: i64,

    /// Evaluation date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Print the serialized alerts.
    #[arg(long)]
    pub json: bool,
}

/// Execute `uztruck fleet`.
pub fn run_fleet(args: &FleetArgs) -> Result<u8> {
    let ctx = Context::seeded();
    let trucks = ctx.fleet.list_trucks();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trucks)?);
        return Ok(0);
    }

    for truck in &trucks {
        println!(
            "{:>3}  {}  {} {} ({}, {:.1} t, {})",
            truck.id,
            truck.license_plate,
            truck.brand,
            truck.model,
            truck.year,
            truck.capacity_tons,
            truck.status
        );
    }
    println!("{} trucks", trucks.len());
    Ok(0)
}

/// Execute `uztruck documents`.
pub fn run_documents(args: &DocumentsArgs) -> Result<u8> {
    let ctx = Context::seeded();
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let truck_id = TruckId::new(args.truck);
    if ctx.fleet.get_truck(truck_id).is_none() {
        bail!("truck {truck_id} not found");
    }

    let snapshots: Vec<DocumentSnapshot> = ctx
        .fleet
        .documents_for(truck_id)
        .iter()
        .filter_map(|doc| {
            ctx.fleet
                .get_type(doc.document_type_id)
                .map(|ty| DocumentSnapshot::derive(doc, &ty.name, as_of))
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
        return Ok(0);
    }

    for snap in &snapshots {
        println!(
            "{:>3}  {}  {}  expires {} ({} days, {:?})",
            snap.id, snap.document_number, snap.document_type_name, snap.expiry_date,
            snap.days_until_expiry, snap.status
        );
    }
    println!("{} documents as of {as_of}", snapshots.len());
    Ok(0)
}

/// Execute `uztruck alerts`.
pub fn run_alerts(args: &AlertsArgs) -> Result<u8> {
    if args.within < 0 {
        bail!("--within must not be negative");
    }
    let ctx = Context::seeded();
    let as_of = resolve_as_of(args.as_of.as_deref())?;
    let alerts = expiry_alerts(&ctx.fleet, &ctx.fleet, &ctx.fleet, as_of, args.within);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&alerts)?);
        return Ok(0);
    }

    for alert in &alerts {
        println!(
            "{:?}  truck {} ({})  {} {}  expires {} ({} days)",
            alert.alert_level,
            alert.truck_id,
            alert.license_plate,
            alert.document_number,
            alert.document_type_name,
            alert.expiry_date,
            alert.days_until_expiry
        );
    }
    println!("{} alerts as of {as_of}", alerts.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_listing_succeeds() {
        assert_eq!(run_fleet(&FleetArgs { json: true }).unwrap(), 0);
    }

    #[test]
    fn documents_require_a_known_truck() {
        let known = DocumentsArgs {
            truck: 1,
            as_of: Some("2024-05-27".into()),
            json: true,
        };
        assert_eq!(run_documents(&known).unwrap(), 0);

        let unknown = DocumentsArgs {
            truck: 99,
            as_of: Some("2024-05-27".into()),
            json: true,
        };
        assert!(run_documents(&unknown).is_err());
    }

    #[test]
    fn alerts_reject_a_negative_window() {
        let args = AlertsArgs {
            within: -1,
            as_of: Some("2024-05-27".into()),
            json: true,
        };
        assert!(run_alerts(&args).is_err());

        let ok = AlertsArgs {
            within: 30,
            as_of: Some("2024-05-27".into()),
            json: true,
        };
        assert_eq!(run_alerts(&ok).unwrap(), 0);
    }
}

//! # uztruck CLI entry point
//!
//! Parses arguments with clap derive macros and dispatches to the
//! subcommand handlers. Exit codes: 0 for success (and deficiency-free
//! checks), 1 when a check finds deficiencies, 2 on operational errors.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use uztruck_cli::check::{run_check, run_route_check, CheckArgs, RouteCheckArgs};
use uztruck_cli::directory::{run_requirements, run_routes, RequirementsArgs, RoutesArgs};
use uztruck_cli::fleet::{run_alerts, run_documents, run_fleet, AlertsArgs, DocumentsArgs, FleetArgs};
use uztruck_cli::serve::{run_serve, ServeArgs};

/// UZTRUCK fleet-compliance toolchain.
///
/// Deficiency checks for Eurasian corridor haulage: which papers a truck
/// is missing for a destination, which are about to expire, and what
/// closing the gaps costs.
#[derive(Parser, Debug)]
#[command(name = "uztruck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a truck's papers against a country selection.
    Check(CheckArgs),

    /// Evaluate a truck's papers against a corridor route.
    #[command(name = "route-check")]
    RouteCheck(RouteCheckArgs),

    /// List the requirement catalog, optionally scoped to one country.
    Requirements(RequirementsArgs),

    /// List the truck register.
    Fleet(FleetArgs),

    /// List one truck's documents with derived expiry state.
    Documents(DocumentsArgs),

    /// List fleet-wide expiry alerts.
    Alerts(AlertsArgs),

    /// List the corridor route directory.
    Routes(RoutesArgs),

    /// Run the HTTP service.
    Serve(ServeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::RouteCheck(args) => run_route_check(&args),
        Commands::Requirements(args) => run_requirements(&args),
        Commands::Fleet(args) => run_fleet(&args),
        Commands::Documents(args) => run_documents(&args),
        Commands::Alerts(args) => run_alerts(&args),
        Commands::Routes(args) => run_routes(&args),
        Commands::Serve(args) => run_serve(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

//! # Serve Subcommand
//!
//! Runs the HTTP service in-process. Equivalent to the `uztruck-api`
//! binary, with the bind address taken from the flag instead of the
//! environment.

use anyhow::{Context as _, Result};
use clap::Args;

use uztruck_api::state::AppState;

/// Arguments for `uztruck serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Socket address to bind.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub addr: String,
}

/// Execute `uztruck serve`. Blocks until the server shuts down.
pub fn run_serve(args: &ServeArgs) -> Result<u8> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async {
        let app = uztruck_api::app(AppState::seeded());
        let listener = tokio::net::TcpListener::bind(&args.addr)
            .await
            .with_context(|| format!("failed to bind {}", args.addr))?;
        tracing::info!(addr = %args.addr, "uztruck-api listening");
        axum::serve(listener, app).await.context("server error")
    })?;
    Ok(0)
}

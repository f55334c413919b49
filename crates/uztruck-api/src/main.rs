use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use uztruck_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let state = AppState::seeded();
    let app = uztruck_api::app(state);

    let listener = TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, "uztruck-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

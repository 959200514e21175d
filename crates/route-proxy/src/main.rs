use anyhow::Context;
use common::{telemetry, Config};
use route_proxy::{router, DirectionsClient};
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing("route-proxy", &config.log_level);

    let api_key = config.api_key()?.to_string();
    let directions = DirectionsClient::new(config.directions_url.clone(), api_key);
    info!("🗺️ Directions service at {}", directions.base_url());

    let app = router(directions);

    info!("🚀 Route proxy listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Received shutdown signal");
}

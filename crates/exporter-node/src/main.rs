//! Exporter binary entry point.

use anyhow::{Context, Result};
use exporter_node::{build_collector, server, ExporterConfig};
use exporter_telemetry::{init_telemetry, TelemetryConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("failed to initialize telemetry")?;

    let config = ExporterConfig::from_env().context("invalid exporter configuration")?;
    info!(
        rpc_url = %config.rpc_url,
        listen_addr = %config.listen_addr,
        window_size = config.window_size,
        fetch_mode = %config.fetch_mode,
        "Starting Ethereum transaction-average exporter"
    );

    let collector = build_collector(&config).context("failed to build collector")?;

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    server::serve(listener, server::router(collector), shutdown_signal())
        .await
        .context("metrics server error")?;

    info!("Exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

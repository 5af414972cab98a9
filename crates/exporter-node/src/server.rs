//! Prometheus exposition endpoint.
//!
//! Each `GET /metrics` runs exactly one collection cycle. A failed cycle is
//! answered with HTTP 500 so the scraper marks the target as failed rather
//! than recording a stale or zero value.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use eth_tx_average::{BlockWindowAverageCollector, ChainDataProvider, ExpositionError};
use exporter_telemetry::{
    encode_families, gather_self_metrics, record_scrape, register_metrics, time_histogram,
    SCRAPE_DURATION,
};
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

/// Build the exporter router around a shared collector.
///
/// Registers the exporter's self-metrics so `/metrics` carries them no
/// matter how the process initialized telemetry.
pub fn router<P>(collector: Arc<BlockWindowAverageCollector<P>>) -> Router
where
    P: ChainDataProvider + 'static,
{
    if let Err(err) = register_metrics() {
        error!(error = %err, "Failed to register exporter self-metrics");
    }

    Router::new()
        .route("/metrics", get(metrics_handler::<P>))
        .route("/health", get(health_check))
        .with_state(collector)
}

/// Serve `router` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Metrics server listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn metrics_handler<P>(State(collector): State<Arc<BlockWindowAverageCollector<P>>>) -> Response
where
    P: ChainDataProvider + 'static,
{
    let sample = {
        let _timer = time_histogram!(SCRAPE_DURATION);
        collector.collect().await
    };

    let mut families = match sample.to_metric_families() {
        Ok(families) => families,
        Err(err @ ExpositionError::InvalidMetric { .. }) => {
            record_scrape(false);
            if let Some(cause) = sample.error() {
                warn!(error = %cause, kind = ?cause.kind(), "Collection cycle failed");
            }
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
        Err(err) => {
            record_scrape(false);
            error!(error = %err, "Failed to render collected sample");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    record_scrape(true);
    debug!(value = ?sample.value(), "Collection cycle succeeded");
    families.extend(gather_self_metrics());

    match encode_families(&families) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)],
            body,
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn health_check() -> &'static str {
    "ok"
}

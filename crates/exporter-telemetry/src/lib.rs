//! # Exporter Telemetry
//!
//! Logging and self-metrics for the Ethereum transaction-average exporter.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use exporter_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `eth-tx-exporter` | Service name in logs |
//! | `EXPORTER_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `EXPORTER_JSON_LOGS` | `false` (`true` in containers) | JSON formatted logs |
//! | `EXPORTER_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

mod config;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_families, gather_self_metrics, record_scrape, register_metrics, HistogramTimer,
    SCRAPES_TOTAL, SCRAPE_DURATION,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and register self-metrics.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    // Metrics first so a logging failure still leaves them usable
    register_metrics()?;
    tracing_setup::init_tracing(config)
}

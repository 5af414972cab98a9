//! # Exporter Configuration
//!
//! Environment-driven settings for the exporter process. Every value has a
//! default; `validate` rejects combinations the collector cannot run with.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use eth_tx_average::domain::{FetchMode, WindowConfig, DEFAULT_WINDOW_SIZE};
use eth_tx_average::{CollectorError, HttpRpcConfig};
use thiserror::Error;

/// Complete exporter configuration.
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// Node JSON-RPC endpoint.
    pub rpc_url: String,
    /// Address the `/metrics` server binds to.
    pub listen_addr: SocketAddr,
    /// Number of trailing blocks to average.
    pub window_size: u64,
    /// How count lookups are issued within a cycle.
    pub fetch_mode: FetchMode,
    /// Per-request timeout for node calls.
    pub rpc_timeout: Duration,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9368)),
            window_size: DEFAULT_WINDOW_SIZE,
            fetch_mode: FetchMode::Sequential,
            rpc_timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error("RPC URL must start with http:// or https://, got {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid window: {0}")]
    Window(#[from] CollectorError),

    #[error("RPC timeout must be non-zero")]
    ZeroTimeout,
}

impl ExporterConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ETH_RPC_URL`: Node endpoint (default: http://localhost:8545)
    /// - `EXPORTER_LISTEN_ADDR`: Metrics server address (default: 0.0.0.0:9368)
    /// - `EXPORTER_WINDOW_SIZE`: Blocks to average (default: 5)
    /// - `EXPORTER_FETCH_MODE`: `sequential` or `concurrent` (default: sequential)
    /// - `EXPORTER_RPC_TIMEOUT_SECS`: Node request timeout (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup and validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            rpc_url: lookup("ETH_RPC_URL").unwrap_or(defaults.rpc_url),
            listen_addr: parse_var(&lookup, "EXPORTER_LISTEN_ADDR")?
                .unwrap_or(defaults.listen_addr),
            window_size: parse_var(&lookup, "EXPORTER_WINDOW_SIZE")?
                .unwrap_or(defaults.window_size),
            fetch_mode: parse_var(&lookup, "EXPORTER_FETCH_MODE")?
                .unwrap_or(defaults.fetch_mode),
            rpc_timeout: parse_var(&lookup, "EXPORTER_RPC_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.rpc_timeout),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(ConfigError::InvalidRpcUrl(self.rpc_url.clone()));
        }
        self.window().validate()?;
        if self.rpc_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn window(&self) -> WindowConfig {
        WindowConfig::new(self.window_size).with_fetch_mode(self.fetch_mode)
    }

    pub fn http_rpc(&self) -> HttpRpcConfig {
        HttpRpcConfig {
            url: self.rpc_url.clone(),
            timeout: self.rpc_timeout,
        }
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    var,
                    reason: e.to_string(),
                })
        })
        .transpose()
}

//! # Ethereum Transaction-Average Exporter
//!
//! Wires the block window average collector to a node over HTTP JSON-RPC
//! and serves the result on a Prometheus `/metrics` endpoint.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Initialize telemetry (logging, self-metrics)
//! 3. Build RPC client → chain-data provider → collector
//! 4. Bind the metrics listener and serve until Ctrl-C

pub mod config;
pub mod server;

use std::sync::Arc;

use eth_tx_average::{
    BlockWindowAverageCollector, CollectorError, HttpRpcClient, JsonRpcChainProvider, RpcError,
};
use thiserror::Error;

pub use config::{ConfigError, ExporterConfig};

/// Collector type used by the exporter process.
pub type NodeCollector = BlockWindowAverageCollector<JsonRpcChainProvider<HttpRpcClient>>;

/// Errors building the collector stack.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Failed to build RPC client: {0}")]
    Client(#[from] RpcError),

    #[error("Failed to build collector: {0}")]
    Collector(#[from] CollectorError),
}

/// Build the collector stack from configuration.
pub fn build_collector(config: &ExporterConfig) -> Result<Arc<NodeCollector>, BuildError> {
    let client = HttpRpcClient::new(config.http_rpc())?;
    let provider = JsonRpcChainProvider::new(client);
    let collector = BlockWindowAverageCollector::with_config(provider, config.window())?;
    Ok(Arc::new(collector))
}

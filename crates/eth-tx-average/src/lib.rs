//! # Ethereum Transaction Average
//!
//! Rolling average of transactions per block over the trailing window of an
//! Ethereum-compatible chain, exported as a single Prometheus gauge.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure types and arithmetic, no I/O
//!   - `HexU64`: JSON-RPC hex quantity codec
//!   - `WindowConfig`: Window size and fetch strategy
//!   - `MetricSample`: Gauge or invalid-metric outcome of one cycle
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `ChainDataProvider`: Driven port (head height, per-block tx counts)
//!   - `RpcClient`: Driven port (raw `call(method, params)`)
//!   - `MetricSink`: Receives the sample of a cycle
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `BlockWindowAverageCollector`: One head lookup, N count lookups, one sample
//!
//! - **Adapters Layer** (`adapters/`): External connections
//!   - `JsonRpcChainProvider`: `eth_blockNumber` / `eth_getBlockTransactionCountByNumber`
//!   - `HttpRpcClient`: JSON-RPC 2.0 over HTTP
//!
//! ## Invariants
//!
//! - Exactly one sample per collection cycle, never zero, never more than one.
//! - A failed call anywhere in the cycle yields an invalid sample; no partial gauge.
//! - The window is clamped at genesis; block numbers never wrap.
//!
//! ## Usage Example
//!
//! ```ignore
//! use eth_tx_average::{
//!     BlockWindowAverageCollector, HttpRpcClient, HttpRpcConfig, JsonRpcChainProvider,
//! };
//!
//! let client = HttpRpcClient::new(HttpRpcConfig::default())?;
//! let collector = BlockWindowAverageCollector::new(JsonRpcChainProvider::new(client))?;
//!
//! let sample = collector.collect().await;
//! let families = sample.to_metric_families()?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{HttpRpcClient, HttpRpcConfig, JsonRpcChainProvider};
pub use domain::{FetchMode, HexU64, MetricSample, QuantityError, WindowConfig, METRIC_NAME};
pub use error::{CollectorError, ErrorKind, ExpositionError, RpcError};
pub use ports::{ChainDataProvider, MetricSink, RpcClient};
pub use service::BlockWindowAverageCollector;

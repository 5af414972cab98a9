//! Ports layer: the seams the collector is wired through.

pub mod inbound;
pub mod outbound;

pub use inbound::MetricSink;
pub use outbound::{methods, ChainDataProvider, RpcClient};

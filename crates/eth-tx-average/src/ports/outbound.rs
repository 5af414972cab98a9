//! Outbound Ports (Driven Ports)
//!
//! Dependencies the collector needs from the outside world: a node that
//! can report its head and per-block transaction counts.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::error::RpcError;

/// JSON-RPC method names used against the node.
pub mod methods {
    pub const BLOCK_NUMBER: &str = "eth_blockNumber";
    pub const BLOCK_TRANSACTION_COUNT_BY_NUMBER: &str = "eth_getBlockTransactionCountByNumber";
}

/// Raw remote-procedure-call capability (Driven Port).
///
/// Implementations own transport concerns: connection reuse, timeouts,
/// request ids. `params` are sent positionally.
#[async_trait]
pub trait RpcClient: Send + Sync {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError>;
}

/// Chain data needed for one averaging cycle (Driven Port).
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    /// Current head block number.
    async fn current_height(&self) -> Result<u64, RpcError>;

    /// Number of transactions in block `block_number`.
    async fn transaction_count(&self, block_number: u64) -> Result<u64, RpcError>;
}

#[async_trait]
impl<T: ChainDataProvider + ?Sized> ChainDataProvider for Arc<T> {
    async fn current_height(&self) -> Result<u64, RpcError> {
        (**self).current_height().await
    }

    async fn transaction_count(&self, block_number: u64) -> Result<u64, RpcError> {
        (**self).transaction_count(block_number).await
    }
}

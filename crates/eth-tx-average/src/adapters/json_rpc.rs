//! Chain data over Ethereum JSON-RPC.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{decode_quantity, encode_quantity};
use crate::error::RpcError;
use crate::ports::{methods, ChainDataProvider, RpcClient};

/// Implements [`ChainDataProvider`] on top of any [`RpcClient`].
pub struct JsonRpcChainProvider<C> {
    client: C,
}

impl<C: RpcClient> JsonRpcChainProvider<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    async fn call_quantity(&self, method: &str, params: Vec<Value>) -> Result<u64, RpcError> {
        let result = self.client.call(method, params).await?;
        if result.is_null() {
            return Err(RpcError::MissingResult {
                method: method.to_string(),
            });
        }
        Ok(decode_quantity(&result)?)
    }
}

#[async_trait]
impl<C: RpcClient> ChainDataProvider for JsonRpcChainProvider<C> {
    async fn current_height(&self) -> Result<u64, RpcError> {
        self.call_quantity(methods::BLOCK_NUMBER, Vec::new()).await
    }

    async fn transaction_count(&self, block_number: u64) -> Result<u64, RpcError> {
        self.call_quantity(
            methods::BLOCK_TRANSACTION_COUNT_BY_NUMBER,
            vec![Value::String(encode_quantity(block_number))],
        )
        .await
    }
}

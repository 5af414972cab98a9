//! JSON-RPC 2.0 client over HTTP.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::error::RpcError;
use crate::ports::RpcClient;

/// Cap on how much of an error body is kept in [`RpcError::HttpStatus`].
const MAX_ERROR_BODY: usize = 512;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpRpcConfig {
    /// Node endpoint, e.g. `http://localhost:8545`
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for HttpRpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a [Value],
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
}

/// Sends one JSON-RPC request per call; connections are pooled by reqwest.
pub struct HttpRpcClient {
    http: reqwest::Client,
    config: HttpRpcConfig,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    pub fn new(config: HttpRpcConfig) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            config,
            next_id: AtomicU64::new(1),
        })
    }

    fn map_send_error(&self, method: &str, err: reqwest::Error) -> RpcError {
        if err.is_timeout() {
            RpcError::Timeout {
                method: method.to_string(),
                timeout: self.config.timeout,
            }
        } else {
            RpcError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl RpcClient for HttpRpcClient {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params: &params,
        };

        let response = self
            .http
            .post(&self.config.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(method, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(method, e))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body)
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            return Err(RpcError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: JsonRpcResponse = serde_json::from_slice(&body)
            .map_err(|e| RpcError::MalformedResponse(e.to_string()))?;

        if let Some(error) = decoded.error {
            return Err(RpcError::Node {
                code: error.code,
                message: error.message,
            });
        }

        Ok(decoded.result.unwrap_or(Value::Null))
    }
}

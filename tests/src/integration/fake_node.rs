//! In-process JSON-RPC node for end-to-end tests.
//!
//! Answers `eth_blockNumber` and `eth_getBlockTransactionCountByNumber` from
//! a fixed chain and records every method it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Chain contents served by the fake node.
#[derive(Debug, Clone, Default)]
pub struct FakeChain {
    pub head: u64,
    pub counts: HashMap<u64, u64>,
    /// Blocks whose count lookup answers with a node error.
    pub failing_blocks: Vec<u64>,
}

impl FakeChain {
    pub fn new(head: u64) -> Self {
        Self {
            head,
            ..Self::default()
        }
    }

    pub fn with_count(mut self, block: u64, count: u64) -> Self {
        self.counts.insert(block, count);
        self
    }

    pub fn failing(mut self, block: u64) -> Self {
        self.failing_blocks.push(block);
        self
    }
}

#[derive(Clone)]
struct NodeState {
    chain: Arc<FakeChain>,
    calls: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
}

/// Handle to a running fake node.
pub struct FakeNode {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<(String, Vec<Value>)>>>,
}

impl FakeNode {
    pub async fn spawn(chain: FakeChain) -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = NodeState {
            chain: Arc::new(chain),
            calls: Arc::clone(&calls),
        };
        let router = Router::new().route("/", post(handle)).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, calls }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(method, _)| method.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<NodeState>, Json(request): Json<Value>) -> Json<Value> {
    let id = request["id"].clone();
    let method = request["method"].as_str().unwrap_or_default().to_string();
    let params = request["params"].as_array().cloned().unwrap_or_default();
    state
        .calls
        .lock()
        .unwrap()
        .push((method.clone(), params.clone()));

    let chain = &state.chain;
    let response = match method.as_str() {
        "eth_blockNumber" => json!({"jsonrpc": "2.0", "id": id, "result": format!("{:#x}", chain.head)}),
        "eth_getBlockTransactionCountByNumber" => {
            let block = params
                .first()
                .and_then(Value::as_str)
                .and_then(|hex| u64::from_str_radix(hex.trim_start_matches("0x"), 16).ok());
            match block {
                Some(block) if chain.failing_blocks.contains(&block) => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": {"code": -32000, "message": "header not found"}
                }),
                Some(block) => match chain.counts.get(&block) {
                    Some(count) => {
                        json!({"jsonrpc": "2.0", "id": id, "result": format!("{:#x}", count)})
                    }
                    None => json!({"jsonrpc": "2.0", "id": id, "result": null}),
                },
                None => json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "error": {"code": -32602, "message": "invalid argument 0"}
                }),
            }
        }
        _ => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": -32601, "message": "method not found"}
        }),
    };

    Json(response)
}

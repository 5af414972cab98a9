//! Adapters layer: concrete implementations of the outbound ports.
//!
//! - `JsonRpcChainProvider`: maps the chain-data port onto Ethereum JSON-RPC methods
//! - `HttpRpcClient`: JSON-RPC 2.0 over HTTP

pub mod http_client;
pub mod json_rpc;

pub use http_client::{HttpRpcClient, HttpRpcConfig};
pub use json_rpc::JsonRpcChainProvider;

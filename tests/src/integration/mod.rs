//! Cross-crate flows against an in-process JSON-RPC node.

pub mod exporter_flow;
pub mod fake_node;

//! Error types for the transaction-average collector

use std::time::Duration;
use thiserror::Error;

use crate::domain::QuantityError;

/// Coarse classification of an [`RpcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote call could not complete (connection, timeout, HTTP status).
    Transport,
    /// The node answered, but with an error object or an undecodable payload.
    Protocol,
}

/// Errors surfaced by a remote chain-data call.
///
/// The collector never retries or logs these; the first one in a cycle
/// becomes the payload of the invalid sample.
#[derive(Debug, Clone, Error)]
pub enum RpcError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout after {timeout:?} calling {method}")]
    Timeout { method: String, timeout: Duration },

    #[error("HTTP status {status} from node")]
    HttpStatus { status: u16, body: String },

    #[error("Node error {code}: {message}")]
    Node { code: i64, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Missing result for {method}")]
    MissingResult { method: String },

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),
}

impl RpcError {
    /// Classify the error as transport or protocol level.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RpcError::Transport(_) | RpcError::Timeout { .. } | RpcError::HttpStatus { .. } => {
                ErrorKind::Transport
            }
            RpcError::Node { .. }
            | RpcError::MalformedResponse(_)
            | RpcError::MissingResult { .. }
            | RpcError::InvalidQuantity(_) => ErrorKind::Protocol,
        }
    }

    pub fn is_transport(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}

/// Errors raised while building a collector.
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("Invalid window size: {size} (must be between 1 and {max})")]
    InvalidWindow { size: u64, max: u64 },

    #[error("Invalid metric descriptor: {0}")]
    Descriptor(#[from] prometheus::Error),
}

/// Errors raised while turning a sample into Prometheus families.
#[derive(Debug, Error)]
pub enum ExpositionError {
    #[error("error collecting metric {desc}: {source}")]
    InvalidMetric {
        desc: String,
        #[source]
        source: RpcError,
    },

    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

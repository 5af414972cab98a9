//! # Exporter Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Fake node → RPC client → collector → /metrics
//!     ├── fake_node.rs
//!     └── exporter_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p exporter-tests
//! cargo test -p exporter-tests integration::
//! ```

pub mod integration;

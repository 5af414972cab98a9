//! Domain layer: pure types and arithmetic, no I/O.

pub mod quantity;
pub mod sample;
pub mod window;

pub use quantity::{decode_quantity, encode_quantity, HexU64, QuantityError};
pub use sample::{average_descriptor, metric_help, MetricSample, METRIC_NAME};
pub use window::{
    average, block_window, FetchMode, WindowConfig, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE,
};

//! Trailing block window and averaging arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::error::CollectorError;

/// Default number of trailing blocks averaged per scrape.
pub const DEFAULT_WINDOW_SIZE: u64 = 5;

/// Upper bound on the window so a single scrape stays bounded.
pub const MAX_WINDOW_SIZE: u64 = 1024;

/// How per-block transaction counts are fetched within one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// One call at a time, stopping at the first failure.
    #[default]
    Sequential,
    /// All count lookups in flight at once after the head lookup.
    Concurrent,
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Sequential => f.write_str("sequential"),
            FetchMode::Concurrent => f.write_str("concurrent"),
        }
    }
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(FetchMode::Sequential),
            "concurrent" => Ok(FetchMode::Concurrent),
            other => Err(format!("unknown fetch mode: {other}")),
        }
    }
}

/// Window configuration fixed for the lifetime of a collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Number of most recent blocks to average over
    pub size: u64,
    /// Fetch strategy for the count lookups
    pub fetch_mode: FetchMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW_SIZE,
            fetch_mode: FetchMode::Sequential,
        }
    }
}

impl WindowConfig {
    pub fn new(size: u64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_fetch_mode(mut self, fetch_mode: FetchMode) -> Self {
        self.fetch_mode = fetch_mode;
        self
    }

    /// Validate the window bounds.
    pub fn validate(&self) -> Result<(), CollectorError> {
        if self.size == 0 || self.size > MAX_WINDOW_SIZE {
            return Err(CollectorError::InvalidWindow {
                size: self.size,
                max: MAX_WINDOW_SIZE,
            });
        }
        Ok(())
    }
}

/// Block numbers covered by the window ending at `head`, newest first.
///
/// The window never extends below genesis: a chain at height 2 with a
/// window of 5 yields `[2, 1, 0]`.
pub fn block_window(head: u64, size: u64) -> Vec<u64> {
    (0..size).map_while(|offset| head.checked_sub(offset)).collect()
}

/// Floating-point mean of `total` over `blocks` blocks.
pub fn average(total: u128, blocks: usize) -> f64 {
    if blocks == 0 {
        return 0.0;
    }
    total as f64 / blocks as f64
}

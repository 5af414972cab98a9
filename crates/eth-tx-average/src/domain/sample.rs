//! Metric descriptor and the per-cycle sample.

use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{Gauge, Opts};
use std::collections::HashMap;

use crate::error::{ExpositionError, RpcError};

/// Name of the exported gauge.
pub const METRIC_NAME: &str = "eth_average_transactions";

/// Help text for a window of `window_size` blocks.
pub fn metric_help(window_size: u64) -> String {
    format!(
        "the average number of transactions per second over last {} blocks",
        window_size
    )
}

/// Build the label-free descriptor for the average gauge.
pub fn average_descriptor(window_size: u64) -> Result<Desc, prometheus::Error> {
    Desc::new(
        METRIC_NAME.to_string(),
        metric_help(window_size),
        Vec::new(),
        HashMap::new(),
    )
}

/// Outcome of exactly one collection cycle.
#[derive(Debug, Clone)]
pub enum MetricSample {
    /// The computed average, exported with zero labels.
    Gauge { desc: Desc, value: f64 },
    /// The cycle aborted; carries the first error encountered.
    Invalid { desc: Desc, error: RpcError },
}

impl MetricSample {
    pub fn is_valid(&self) -> bool {
        matches!(self, MetricSample::Gauge { .. })
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            MetricSample::Gauge { value, .. } => Some(*value),
            MetricSample::Invalid { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&RpcError> {
        match self {
            MetricSample::Gauge { .. } => None,
            MetricSample::Invalid { error, .. } => Some(error),
        }
    }

    /// Render the sample as Prometheus metric families.
    ///
    /// An invalid sample is an error here, so the exposition layer can fail
    /// the scrape instead of publishing a stale or zero value.
    pub fn to_metric_families(&self) -> Result<Vec<MetricFamily>, ExpositionError> {
        match self {
            MetricSample::Gauge { desc, value } => {
                let gauge = Gauge::with_opts(Opts::new(desc.fq_name.clone(), desc.help.clone()))?;
                gauge.set(*value);
                Ok(gauge.collect())
            }
            MetricSample::Invalid { desc, error } => Err(ExpositionError::InvalidMetric {
                desc: desc.fq_name.clone(),
                source: error.clone(),
            }),
        }
    }
}

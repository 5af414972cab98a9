//! Prometheus self-metrics and text exposition.
//!
//! Self-metrics follow the naming convention: `eth_exporter_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::proto::MetricFamily;
use prometheus::{exponential_buckets, CounterVec, Encoder, Histogram, Opts, Registry, TextEncoder};

use crate::TelemetryError;

/// Outcome label values for [`SCRAPES_TOTAL`].
pub mod outcome {
    pub const SUCCESS: &str = "success";
    pub const FAILURE: &str = "failure";
}

lazy_static! {
    /// Registry for the exporter's own metrics
    pub static ref REGISTRY: Registry = Registry::new();

    /// Scrapes served, by outcome
    pub static ref SCRAPES_TOTAL: CounterVec = CounterVec::new(
        Opts::new("eth_exporter_scrapes_total", "Total collection cycles run by the exporter"),
        &["outcome"]  // outcome: success/failure
    ).expect("metric creation failed");

    /// Collection cycle duration
    pub static ref SCRAPE_DURATION: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "eth_exporter_scrape_duration_seconds",
            "Time spent running one collection cycle against the node"
        ).buckets(exponential_buckets(0.005, 2.0, 12).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Register self-metrics with [`REGISTRY`]. Safe to call more than once.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(SCRAPES_TOTAL.clone()),
        Box::new(SCRAPE_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(())
}

/// Record the outcome of one collection cycle.
pub fn record_scrape(success: bool) {
    let label = if success {
        outcome::SUCCESS
    } else {
        outcome::FAILURE
    };
    SCRAPES_TOTAL.with_label_values(&[label]).inc();
}

/// Encode metric families as Prometheus text format.
pub fn encode_families(families: &[MetricFamily]) -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Gather the exporter's self-metrics.
pub fn gather_self_metrics() -> Vec<MetricFamily> {
    REGISTRY.gather()
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}

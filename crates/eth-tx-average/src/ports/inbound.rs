//! Inbound Ports (Driving Ports)
//!
//! The emission side of a scrape: whoever drives a collection cycle hands
//! the collector a sink and receives exactly one sample through it.

use tokio::sync::mpsc;

use crate::domain::MetricSample;

/// Receiver of collected samples.
pub trait MetricSink {
    fn emit(&mut self, sample: MetricSample);
}

impl MetricSink for Vec<MetricSample> {
    fn emit(&mut self, sample: MetricSample) {
        self.push(sample);
    }
}

impl MetricSink for mpsc::UnboundedSender<MetricSample> {
    fn emit(&mut self, sample: MetricSample) {
        if self.send(sample).is_err() {
            tracing::debug!("metric sink receiver dropped, sample discarded");
        }
    }
}

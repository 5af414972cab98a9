//! Block window average collector.
//!
//! One collection cycle is one head lookup followed by one transaction
//! count lookup per block in the window. The first failing call aborts the
//! cycle; partial sums are discarded.

use futures::future::try_join_all;
use prometheus::core::Desc;

use crate::domain::{
    average, average_descriptor, block_window, FetchMode, MetricSample, WindowConfig,
};
use crate::error::{CollectorError, RpcError};
use crate::ports::{ChainDataProvider, MetricSink};

/// Averages transactions per block over the trailing window.
///
/// Holds no mutable state, so a single instance can serve overlapping
/// scrapes behind an `Arc`.
pub struct BlockWindowAverageCollector<P> {
    provider: P,
    config: WindowConfig,
    desc: Desc,
}

impl<P: ChainDataProvider> BlockWindowAverageCollector<P> {
    /// Create a collector with the default five block window.
    pub fn new(provider: P) -> Result<Self, CollectorError> {
        Self::with_config(provider, WindowConfig::default())
    }

    pub fn with_config(provider: P, config: WindowConfig) -> Result<Self, CollectorError> {
        config.validate()?;
        let desc = average_descriptor(config.size)?;
        Ok(Self {
            provider,
            config,
            desc,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// The single fixed descriptor this collector exports.
    pub fn describe(&self) -> Vec<&Desc> {
        vec![&self.desc]
    }

    /// Run one collection cycle and emit its sample into `sink`.
    pub async fn collect_into<S: MetricSink + ?Sized>(&self, sink: &mut S) {
        sink.emit(self.collect().await);
    }

    /// Run one collection cycle.
    pub async fn collect(&self) -> MetricSample {
        match self.window_average().await {
            Ok(value) => MetricSample::Gauge {
                desc: self.desc.clone(),
                value,
            },
            Err(error) => MetricSample::Invalid {
                desc: self.desc.clone(),
                error,
            },
        }
    }

    async fn window_average(&self) -> Result<f64, RpcError> {
        let head = self.provider.current_height().await?;
        let blocks = block_window(head, self.config.size);

        let total: u128 = match self.config.fetch_mode {
            FetchMode::Sequential => {
                let mut total = 0u128;
                for block in &blocks {
                    total += u128::from(self.provider.transaction_count(*block).await?);
                }
                total
            }
            FetchMode::Concurrent => {
                let counts = try_join_all(
                    blocks
                        .iter()
                        .map(|block| self.provider.transaction_count(*block)),
                )
                .await?;
                counts.into_iter().map(u128::from).sum()
            }
        };

        let value = average(total, blocks.len());
        tracing::trace!(
            head,
            blocks = blocks.len(),
            total = %total,
            value,
            "window average computed"
        );
        Ok(value)
    }
}

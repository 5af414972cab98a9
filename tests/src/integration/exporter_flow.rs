//! End-to-end flows: fake node → HTTP JSON-RPC client → collector → `/metrics`.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use eth_tx_average::{
        BlockWindowAverageCollector, ErrorKind, FetchMode, HttpRpcClient, HttpRpcConfig,
        JsonRpcChainProvider, MetricSample, RpcError, WindowConfig, METRIC_NAME,
    };
    use exporter_node::{build_collector, server, ExporterConfig};
    use serde_json::json;
    use tokio::net::TcpListener;

    use crate::integration::fake_node::{FakeChain, FakeNode};

    type Collector = BlockWindowAverageCollector<JsonRpcChainProvider<HttpRpcClient>>;

    fn collector_for(url: String, window: WindowConfig) -> Collector {
        let client = HttpRpcClient::new(HttpRpcConfig {
            url,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        BlockWindowAverageCollector::with_config(JsonRpcChainProvider::new(client), window)
            .unwrap()
    }

    fn uniform_chain() -> FakeChain {
        (1..=5).fold(FakeChain::new(5), |chain, block| chain.with_count(block, 10))
    }

    #[tokio::test]
    async fn test_uniform_chain_average() {
        let node = FakeNode::spawn(uniform_chain()).await;
        let collector = collector_for(node.url(), WindowConfig::default());

        let mut samples = Vec::new();
        collector.collect_into(&mut samples).await;

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].value(), Some(10.0));

        let calls = node.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0].0, "eth_blockNumber");
        let params: Vec<_> = calls[1..].iter().map(|(_, p)| p.clone()).collect();
        assert_eq!(
            params,
            vec![
                vec![json!("0x5")],
                vec![json!("0x4")],
                vec![json!("0x3")],
                vec![json!("0x2")],
                vec![json!("0x1")],
            ]
        );
    }

    #[tokio::test]
    async fn test_unreachable_node_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let collector = collector_for(format!("http://{}", addr), WindowConfig::default());
        let mut samples = Vec::new();
        collector.collect_into(&mut samples).await;

        assert_eq!(samples.len(), 1);
        let error = samples[0].error().expect("invalid sample");
        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_node_error_mid_window() {
        let node = FakeNode::spawn(uniform_chain().failing(3)).await;
        let collector = collector_for(node.url(), WindowConfig::default());

        let mut samples = Vec::new();
        collector.collect_into(&mut samples).await;

        assert_eq!(samples.len(), 1);
        match &samples[0] {
            MetricSample::Invalid { error, .. } => {
                assert!(matches!(error, RpcError::Node { code: -32000, .. }));
            }
            other => panic!("expected invalid sample, got {:?}", other),
        }
        // head + blocks 5, 4, 3
        assert_eq!(node.methods().len(), 4);
    }

    #[tokio::test]
    async fn test_missing_block_is_protocol_failure() {
        let node = FakeNode::spawn(FakeChain::new(5).with_count(5, 1)).await;
        let collector = collector_for(node.url(), WindowConfig::default());

        let sample = collector.collect().await;

        assert_eq!(sample.error().map(RpcError::kind), Some(ErrorKind::Protocol));
    }

    #[tokio::test]
    async fn test_concurrent_fetch_end_to_end() {
        let chain = FakeChain::new(100)
            .with_count(100, 3)
            .with_count(99, 0)
            .with_count(98, 4)
            .with_count(97, 1)
            .with_count(96, 4);
        let node = FakeNode::spawn(chain).await;
        let window = WindowConfig::default().with_fetch_mode(FetchMode::Concurrent);
        let collector = collector_for(node.url(), window);

        assert_eq!(collector.collect().await.value(), Some(2.4));
        assert_eq!(node.methods().len(), 6);
    }

    #[tokio::test]
    async fn test_describe_without_node() {
        let collector = collector_for("http://127.0.0.1:1".to_string(), WindowConfig::default());

        let descs = collector.describe();

        assert_eq!(descs.len(), 1);
        assert_eq!(descs[0].fq_name, METRIC_NAME);
        assert!(descs[0].variable_labels.is_empty());
    }

    async fn spawn_exporter(rpc_url: String) -> String {
        let config = ExporterConfig {
            rpc_url,
            ..ExporterConfig::default()
        };
        let collector = build_collector(&config).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(server::serve(
            listener,
            server::router(Arc::clone(&collector)),
            std::future::pending(),
        ));
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_exporter_serves_gauge() {
        let node = FakeNode::spawn(uniform_chain()).await;
        let exporter = spawn_exporter(node.url()).await;

        let response = reqwest::get(format!("{}/metrics", exporter)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body = response.text().await.unwrap();
        assert!(body.contains("# TYPE eth_average_transactions gauge"));
        assert!(body.contains("\neth_average_transactions 10\n"));
        assert!(body.contains("eth_exporter_scrapes_total"));
    }

    #[tokio::test]
    async fn test_exporter_reports_failed_scrape() {
        let node = FakeNode::spawn(uniform_chain().failing(3)).await;
        let exporter = spawn_exporter(node.url()).await;

        let response = reqwest::get(format!("{}/metrics", exporter)).await.unwrap();
        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        );

        let body = response.text().await.unwrap();
        assert!(body.contains("error collecting metric eth_average_transactions"));
        assert!(body.contains("header not found"));
    }

    #[tokio::test]
    async fn test_each_scrape_runs_fresh_cycle() {
        let node = FakeNode::spawn(uniform_chain()).await;
        let exporter = spawn_exporter(node.url()).await;

        for _ in 0..2 {
            let response = reqwest::get(format!("{}/metrics", exporter)).await.unwrap();
            assert!(response.status().is_success());
        }

        let heads = node
            .methods()
            .iter()
            .filter(|m| m.as_str() == "eth_blockNumber")
            .count();
        assert_eq!(heads, 2);
        assert_eq!(node.methods().len(), 12);
    }
}

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use pagetext_engine::{BatchFetcher, ExtractClient, ExtractError, FailureKind};
use pretty_assertions::assert_eq;

/// Scripted client: per-URL latency and failure, no network.
#[derive(Default)]
struct StubClient {
    delays_ms: HashMap<String, u64>,
    failing: Vec<String>,
}

impl StubClient {
    fn delayed(mut self, url: &str, ms: u64) -> Self {
        self.delays_ms.insert(url.to_string(), ms);
        self
    }

    fn failing(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }
}

#[async_trait::async_trait]
impl ExtractClient for StubClient {
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        if let Some(ms) = self.delays_ms.get(url) {
            tokio::time::sleep(Duration::from_millis(*ms)).await;
        }
        if self.failing.iter().any(|failing| failing == url) {
            Err(ExtractError::new(
                FailureKind::Network,
                format!("unreachable: {url}"),
            ))
        } else {
            Ok(format!("content of {url}"))
        }
    }
}

fn urls(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn outcomes_follow_input_order_not_completion_order() {
    // Earlier URLs resolve last; the result order must not change.
    let client = StubClient::default()
        .delayed("https://a.example", 120)
        .delayed("https://b.example", 60);
    let fetcher = BatchFetcher::new(Arc::new(client));

    let input = urls(&["https://a.example", "https://b.example", "https://c.example"]);
    let result = fetcher.run(&input).await;

    let reported: Vec<&str> = result.outcomes.iter().map(|o| o.url.as_str()).collect();
    assert_eq!(
        reported,
        vec!["https://a.example", "https://b.example", "https://c.example"]
    );
    assert_eq!(result.success_count(), 3);
    assert_eq!(result.failure_count(), 0);
    assert_eq!(
        result.outcomes[2].result.as_deref(),
        Ok("content of https://c.example")
    );
}

#[tokio::test]
async fn one_failure_never_affects_siblings() {
    let client = StubClient::default()
        .failing("https://b.example")
        .delayed("https://a.example", 80);
    let fetcher = BatchFetcher::new(Arc::new(client));

    let input = urls(&["https://a.example", "https://b.example", "https://c.example"]);
    let result = fetcher.run(&input).await;

    assert_eq!(result.len(), 3);
    assert_eq!(result.success_count() + result.failure_count(), input.len());
    assert!(result.outcomes[0].is_success());
    assert!(!result.outcomes[1].is_success());
    assert!(result.outcomes[2].is_success());

    let err = result.outcomes[1].result.as_ref().unwrap_err();
    assert_eq!(err.message, "unreachable: https://b.example");
}

#[tokio::test]
async fn duplicate_urls_get_one_outcome_each() {
    let fetcher = BatchFetcher::new(Arc::new(StubClient::default()));

    let input = urls(&["https://a.example", "https://a.example"]);
    let result = fetcher.run(&input).await;

    assert_eq!(result.len(), 2);
    assert_eq!(result.outcomes[0].url, "https://a.example");
    assert_eq!(result.outcomes[1].url, "https://a.example");
}

#[tokio::test]
async fn bounded_concurrency_keeps_the_order_contract() {
    let client = StubClient::default().delayed("https://a.example", 40);
    let fetcher = BatchFetcher::new(Arc::new(client))
        .with_concurrency_limit(NonZeroUsize::new(1).expect("nonzero"));

    let input = urls(&["https://a.example", "https://b.example"]);
    let result = fetcher.run(&input).await;

    let reported: Vec<&str> = result.outcomes.iter().map(|o| o.url.as_str()).collect();
    assert_eq!(reported, vec!["https://a.example", "https://b.example"]);
}

#[tokio::test]
async fn empty_url_list_yields_an_empty_result() {
    let fetcher = BatchFetcher::new(Arc::new(StubClient::default()));

    let result = fetcher.run(&[]).await;

    assert!(result.is_empty());
    assert_eq!(result.success_count(), 0);
    assert_eq!(result.failure_count(), 0);
}

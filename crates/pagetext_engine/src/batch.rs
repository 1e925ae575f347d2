use std::num::NonZeroUsize;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use crate::{BatchResult, ExtractClient, FetchOutcome};

/// Runs one extraction per URL concurrently and collects outcomes in input
/// order. One URL's failure never cancels or affects any other URL's call,
/// and `run` returns only when every call has settled.
pub struct BatchFetcher {
    client: Arc<dyn ExtractClient>,
    concurrency_limit: Option<NonZeroUsize>,
}

impl BatchFetcher {
    /// Unbounded fan-out: every URL's request starts immediately.
    pub fn new(client: Arc<dyn ExtractClient>) -> Self {
        Self {
            client,
            concurrency_limit: None,
        }
    }

    /// Caps the number of in-flight requests. The outcome contract is
    /// unchanged; only scheduling differs.
    pub fn with_concurrency_limit(mut self, limit: NonZeroUsize) -> Self {
        self.concurrency_limit = Some(limit);
        self
    }

    pub async fn run(&self, urls: &[String]) -> BatchResult {
        if urls.is_empty() {
            return BatchResult::default();
        }
        let in_flight = self
            .concurrency_limit
            .map_or(urls.len(), NonZeroUsize::get);

        // Outcomes are slotted by originating index, so the result order
        // matches input order regardless of network completion order.
        let mut slots: Vec<Option<FetchOutcome>> = Vec::with_capacity(urls.len());
        slots.resize_with(urls.len(), || None);

        let mut settled = stream::iter(urls.iter().cloned().enumerate())
            .map(|(index, url)| {
                let client = Arc::clone(&self.client);
                async move {
                    let result = client.extract(&url).await;
                    (index, FetchOutcome { url, result })
                }
            })
            .buffer_unordered(in_flight);

        while let Some((index, outcome)) = settled.next().await {
            slots[index] = Some(outcome);
        }

        BatchResult {
            outcomes: slots.into_iter().flatten().collect(),
        }
    }
}

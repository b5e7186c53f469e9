//! Mock remote fetcher for testing.

use std::sync::Mutex;

use lookup_core::RemoteFetcher;

/// Mock fetcher that records every company it was asked to look up.
#[derive(Debug, Default)]
pub struct MockRemoteFetcher {
    calls: Mutex<Vec<String>>,
}

impl MockRemoteFetcher {
    /// Creates a new mock fetcher with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the companies fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns how many fetches were started.
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait::async_trait]
impl RemoteFetcher for MockRemoteFetcher {
    async fn fetch_company(&self, company: &str) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(company.to_owned());
    }
}

//! Remote fetcher abstraction.

use crate::TRACING_TARGET_FETCH;

/// Starts a remote lookup for a validated company name.
///
/// Fetching is fire-and-forget from the workflow's point of view: results and
/// failures are the implementation's concern and never reach the caller.
#[async_trait::async_trait]
pub trait RemoteFetcher: Send + Sync {
    /// Initiates a lookup for `company`.
    async fn fetch_company(&self, company: &str);
}

/// Fetcher that records the request in the trace log and returns.
#[derive(Debug, Clone, Default)]
pub struct TracingFetcher;

#[async_trait::async_trait]
impl RemoteFetcher for TracingFetcher {
    async fn fetch_company(&self, company: &str) {
        tracing::info!(
            target: TRACING_TARGET_FETCH,
            company = %company,
            "company lookup dispatched"
        );
    }
}

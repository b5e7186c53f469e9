//! Mock network monitor for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use lookup_core::{NetworkMonitor, NetworkState};

/// Mock network monitor with a switchable state.
///
/// Counts every query so tests can verify the network was, or was not,
/// consulted.
#[derive(Debug)]
pub struct MockNetworkMonitor {
    available: AtomicBool,
    calls: AtomicUsize,
}

impl MockNetworkMonitor {
    /// Creates a mock reporting the given availability.
    pub fn new(available: bool) -> Self {
        Self {
            available: AtomicBool::new(available),
            calls: AtomicUsize::new(0),
        }
    }

    /// Changes the state reported by subsequent queries.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Returns how many times the network state was queried.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockNetworkMonitor {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait::async_trait]
impl NetworkMonitor for MockNetworkMonitor {
    async fn network_state(&self) -> NetworkState {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.available.load(Ordering::SeqCst).into()
    }
}

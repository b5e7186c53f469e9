//! Mock implementations of workflow collaborators for testing.
//!
//! This module provides mock implementations of the input, network, fetch and
//! notification collaborators defined in lookup-core. Each mock records how
//! it was called.

mod fetcher;
mod input;
mod network;
mod notifier;

use std::sync::Arc;

pub use fetcher::MockRemoteFetcher;
pub use input::MockInputSource;
use lookup_core::{Collaborators, SubmissionWorkflow};
pub use network::MockNetworkMonitor;
pub use notifier::MockValidationNotifier;

/// A complete set of mock collaborators.
///
/// The mocks are shared with the [`Collaborators`] handed to the workflow, so
/// they can be inspected after a submission.
#[derive(Debug, Clone)]
pub struct MockCollaborators {
    /// Mock input source.
    pub input: Arc<MockInputSource>,
    /// Mock network monitor.
    pub network: Arc<MockNetworkMonitor>,
    /// Mock remote fetcher.
    pub fetcher: Arc<MockRemoteFetcher>,
    /// Mock validation notifier.
    pub notifier: Arc<MockValidationNotifier>,
}

impl MockCollaborators {
    /// Creates mocks returning `value` as input and reporting `available`.
    pub fn new(value: impl Into<String>, available: bool) -> Self {
        Self {
            input: Arc::new(MockInputSource::new(value)),
            network: Arc::new(MockNetworkMonitor::new(available)),
            fetcher: Arc::new(MockRemoteFetcher::new()),
            notifier: Arc::new(MockValidationNotifier::new()),
        }
    }

    /// Returns a [`Collaborators`] container backed by these mocks.
    pub fn collaborators(&self) -> Collaborators {
        Collaborators::from_arcs(
            self.input.clone(),
            self.network.clone(),
            self.fetcher.clone(),
        )
        .with_notifier_arc(self.notifier.clone())
    }

    /// Returns a workflow wired to these mocks.
    pub fn workflow(&self) -> SubmissionWorkflow {
        SubmissionWorkflow::new(self.collaborators())
    }
}

/// Creates a [`Collaborators`] container with default mocks.
///
/// The input is empty and the network is available.
pub fn create_mock_collaborators() -> Collaborators {
    MockCollaborators::new("", true).collaborators()
}

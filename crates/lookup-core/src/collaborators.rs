//! Collaborator container for dependency injection.
//!
//! This module provides the [`Collaborators`] struct which holds the external
//! capabilities a [`SubmissionWorkflow`] depends on.
//!
//! [`SubmissionWorkflow`]: crate::SubmissionWorkflow

use std::fmt;
use std::sync::Arc;

use crate::fetch::RemoteFetcher;
use crate::input::InputSource;
use crate::network::NetworkMonitor;
use crate::notify::{TracingNotifier, ValidationNotifier};

/// Container for workflow collaborators.
///
/// Every handle is reference-counted, so cloning the container is cheap and
/// test doubles can be inspected after being handed over.
#[derive(Clone)]
pub struct Collaborators {
    /// Supplies the company name.
    pub input: Arc<dyn InputSource>,
    /// Reports network availability.
    pub network: Arc<dyn NetworkMonitor>,
    /// Starts the remote lookup.
    pub fetcher: Arc<dyn RemoteFetcher>,
    /// Shows validation failures; defaults to [`TracingNotifier`].
    pub notifier: Arc<dyn ValidationNotifier>,
}

impl Collaborators {
    /// Creates a new collaborator container.
    ///
    /// # Parameters
    ///
    /// * `input` - Input source implementation
    /// * `network` - Network monitor implementation
    /// * `fetcher` - Remote fetcher implementation
    pub fn new(
        input: impl InputSource + 'static,
        network: impl NetworkMonitor + 'static,
        fetcher: impl RemoteFetcher + 'static,
    ) -> Self {
        Self::from_arcs(Arc::new(input), Arc::new(network), Arc::new(fetcher))
    }

    /// Creates a container from already shared handles.
    pub fn from_arcs(
        input: Arc<dyn InputSource>,
        network: Arc<dyn NetworkMonitor>,
        fetcher: Arc<dyn RemoteFetcher>,
    ) -> Self {
        Self {
            input,
            network,
            fetcher,
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replaces the validation notifier.
    pub fn with_notifier(mut self, notifier: impl ValidationNotifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Replaces the validation notifier with a shared handle.
    pub fn with_notifier_arc(mut self, notifier: Arc<dyn ValidationNotifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

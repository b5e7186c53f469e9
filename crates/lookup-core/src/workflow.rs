//! The submission workflow.
//!
//! A submission runs a fixed sequence of guard clauses:
//!
//! ```text
//! input ─▶ validate ─▶ network ─▶ fetch
//!             │           │
//!             ▼           ▼
//!         Rejected   Err(NetworkUnavailable)
//! ```
//!
//! Each guard exits as soon as its precondition fails, so later steps never
//! observe an invocation that an earlier step already stopped.

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_WORKFLOW;
use crate::collaborators::Collaborators;
use crate::error::{Error, Result};
use crate::validation::{ValidationOutcome, ValidationReason, validate_value};

/// Outcome of a single submission that did not raise an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Submission {
    /// The remote fetcher was invoked with `company`.
    Fetched {
        /// The company name handed to the fetcher.
        company: String,
    },
    /// The input was rejected and the user was notified locally.
    Rejected {
        /// Why the input was rejected.
        reason: ValidationReason,
    },
}

impl Submission {
    /// Returns true if the fetcher was invoked.
    #[must_use]
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }

    /// Returns true if validation rejected the input.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Validates a company name and hands it to the remote fetcher.
///
/// The workflow holds no state of its own; every call to
/// [`on_submit`](Self::on_submit) queries its collaborators afresh.
#[derive(Debug, Clone)]
pub struct SubmissionWorkflow {
    collaborators: Collaborators,
}

impl SubmissionWorkflow {
    /// Creates a workflow over the given collaborators.
    pub fn new(collaborators: Collaborators) -> Self {
        Self { collaborators }
    }

    /// Returns the collaborators this workflow was built with.
    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Handles a submit action.
    ///
    /// # Errors
    ///
    /// Returns a [`NetworkUnavailable`](crate::ErrorKind::NetworkUnavailable)
    /// error if the input is valid but the network monitor reports no
    /// connection. Validation failures are not errors: they are reported to
    /// the notifier and returned as [`Submission::Rejected`].
    pub async fn on_submit(&self) -> Result<Submission> {
        let company = self.collaborators.input.input_value().await;

        tracing::debug!(
            target: TRACING_TARGET_WORKFLOW,
            input_len = company.len(),
            "submission started"
        );

        if let ValidationOutcome::Invalid(reason) = validate_value(&company) {
            self.show_validation_message(reason).await;
            return Ok(Submission::Rejected { reason });
        }

        self.validate_network().await?;

        self.collaborators.fetcher.fetch_company(&company).await;

        tracing::debug!(
            target: TRACING_TARGET_WORKFLOW,
            company = %company,
            "submission completed"
        );

        Ok(Submission::Fetched { company })
    }

    /// Fails if the network monitor reports no connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::network_unavailable`] when the network is down.
    pub async fn validate_network(&self) -> Result<()> {
        if self.collaborators.network.is_network_available().await {
            return Ok(());
        }

        tracing::warn!(
            target: TRACING_TARGET_WORKFLOW,
            "submission aborted, network unavailable"
        );

        Err(Error::network_unavailable())
    }

    async fn show_validation_message(&self, reason: ValidationReason) {
        tracing::warn!(
            target: TRACING_TARGET_WORKFLOW,
            reason = %reason,
            "submission rejected"
        );

        self.collaborators.notifier.notify_invalid(reason).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        InputSource, NETWORK_UNAVAILABLE_MESSAGE, NetworkMonitor, NetworkState, RemoteFetcher,
        StaticInput, StaticNetwork,
    };

    #[derive(Default)]
    struct CountingNetwork {
        available: bool,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl NetworkMonitor for CountingNetwork {
        async fn network_state(&self) -> NetworkState {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.available.into()
        }
    }

    #[derive(Default)]
    struct RecordingFetcher {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl RemoteFetcher for RecordingFetcher {
        async fn fetch_company(&self, company: &str) {
            self.calls.lock().unwrap().push(company.to_owned());
        }
    }

    fn workflow(
        input: impl InputSource + 'static,
        available: bool,
    ) -> (SubmissionWorkflow, Arc<CountingNetwork>, Arc<RecordingFetcher>) {
        let network = Arc::new(CountingNetwork {
            available,
            ..Default::default()
        });
        let fetcher = Arc::new(RecordingFetcher::default());
        let collaborators = Collaborators::from_arcs(
            Arc::new(input),
            network.clone(),
            fetcher.clone(),
        );

        (SubmissionWorkflow::new(collaborators), network, fetcher)
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let (workflow, network, fetcher) = workflow(StaticInput::empty(), false);

        let submission = workflow.on_submit().await.unwrap();

        assert_eq!(
            submission,
            Submission::Rejected {
                reason: ValidationReason::Empty
            }
        );
        assert_eq!(network.calls.load(Ordering::SeqCst), 0);
        assert!(fetcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_network_unavailable_is_error() {
        let (workflow, network, fetcher) = workflow(StaticInput::new("Acme"), false);

        let error = workflow.on_submit().await.unwrap_err();

        assert!(error.is_network_unavailable());
        assert_eq!(error.message(), Some(NETWORK_UNAVAILABLE_MESSAGE));
        assert_eq!(network.calls.load(Ordering::SeqCst), 1);
        assert!(fetcher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_valid_input_is_fetched() {
        let (workflow, _, fetcher) = workflow(StaticInput::new("Acme"), true);

        let submission = workflow.on_submit().await.unwrap();

        assert!(submission.is_fetched());
        assert_eq!(*fetcher.calls.lock().unwrap(), vec!["Acme".to_owned()]);
    }

    #[tokio::test]
    async fn test_validate_network_guard() {
        let collaborators = Collaborators::new(
            StaticInput::empty(),
            StaticNetwork::available(),
            RecordingFetcher::default(),
        );
        let workflow = SubmissionWorkflow::new(collaborators);

        assert!(workflow.validate_network().await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_collaborators() {
        let (workflow, network, fetcher) = workflow(StaticInput::new("Acme"), true);
        let cloned = workflow.clone();

        cloned.on_submit().await.unwrap();

        assert!(Arc::ptr_eq(
            &workflow.collaborators().fetcher,
            &cloned.collaborators().fetcher
        ));
        assert_eq!(network.calls.load(Ordering::SeqCst), 1);
        assert_eq!(fetcher.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_submission_predicates() {
        let submission = Submission::Rejected {
            reason: ValidationReason::Empty,
        };
        assert!(submission.is_rejected());
        assert!(!submission.is_fetched());
    }
}

//! Submission collaborator configuration.

use clap::Args;
use lookup_core::{Collaborators, NetworkState, StaticInput, StaticNetwork, TracingFetcher};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Configuration for the collaborators of a single submission.
///
/// # Environment Variables
///
/// - `COMPANY_NAME` - Company name to submit (default: empty)
/// - `NETWORK_STATE` - `available` or `unavailable` (default: available)
///
/// # Examples
///
/// ```bash
/// lookup --company-name Acme --network unavailable
/// ```
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct SubmissionConfig {
    /// Company name supplied as the form input.
    ///
    /// An absent value is submitted as an empty input.
    #[arg(long, env = "COMPANY_NAME")]
    #[serde(default)]
    pub company_name: Option<String>,

    /// Network state reported to the workflow.
    #[arg(long = "network", env = "NETWORK_STATE", default_value = "available")]
    #[serde(default)]
    pub network: NetworkState,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            company_name: None,
            network: NetworkState::Available,
        }
    }
}

impl SubmissionConfig {
    /// Builds the collaborators described by this configuration.
    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(
            StaticInput::from_option(self.company_name.clone()),
            StaticNetwork::new(self.network),
            TracingFetcher,
        )
    }

    /// Logs the configuration.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            company_name_set = self.company_name.is_some(),
            network = %self.network,
            "submission configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_company_name_is_rejected() {
        let config = SubmissionConfig::default();
        let workflow = lookup_core::SubmissionWorkflow::new(config.collaborators());

        assert!(workflow.on_submit().await.unwrap().is_rejected());
    }

    #[tokio::test]
    async fn test_unavailable_network_fails() {
        let config = SubmissionConfig {
            company_name: Some("Acme".to_owned()),
            network: NetworkState::Unavailable,
        };
        let workflow = lookup_core::SubmissionWorkflow::new(config.collaborators());

        let error = workflow.on_submit().await.unwrap_err();
        assert!(error.is_network_unavailable());
    }

    #[tokio::test]
    async fn test_available_network_fetches() {
        let config = SubmissionConfig {
            company_name: Some("Acme".to_owned()),
            network: NetworkState::Available,
        };
        let workflow = lookup_core::SubmissionWorkflow::new(config.collaborators());

        assert!(workflow.on_submit().await.unwrap().is_fetched());
    }
}

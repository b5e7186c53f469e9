//! Network availability monitoring.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Snapshot of network connectivity, queried fresh for every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NetworkState {
    /// A connection is available.
    #[default]
    Available,
    /// No connection is available.
    Unavailable,
}

impl NetworkState {
    /// Returns true if a connection is available.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<bool> for NetworkState {
    fn from(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}

impl From<NetworkState> for bool {
    fn from(state: NetworkState) -> Self {
        state.is_available()
    }
}

/// Reports whether network connectivity is currently available.
///
/// Implementations must not fail and must not cache across submissions.
#[async_trait::async_trait]
pub trait NetworkMonitor: Send + Sync {
    /// Returns the current network state.
    async fn network_state(&self) -> NetworkState;

    /// Returns true if the network is currently available.
    async fn is_network_available(&self) -> bool {
        self.network_state().await.is_available()
    }
}

/// Network monitor reporting a fixed state.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticNetwork {
    state: NetworkState,
}

impl StaticNetwork {
    /// Creates a monitor that always reports `state`.
    pub fn new(state: NetworkState) -> Self {
        Self { state }
    }

    /// Creates a monitor that always reports an available network.
    pub fn available() -> Self {
        Self::new(NetworkState::Available)
    }

    /// Creates a monitor that always reports an unavailable network.
    pub fn unavailable() -> Self {
        Self::new(NetworkState::Unavailable)
    }
}

#[async_trait::async_trait]
impl NetworkMonitor for StaticNetwork {
    async fn network_state(&self) -> NetworkState {
        self.state
    }
}

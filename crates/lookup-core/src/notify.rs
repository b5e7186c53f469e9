//! Local notification for rejected input.

use crate::TRACING_TARGET_NOTIFY;
use crate::validation::ValidationReason;

/// Shows the user why their input was rejected.
#[async_trait::async_trait]
pub trait ValidationNotifier: Send + Sync {
    /// Notifies about a validation failure.
    async fn notify_invalid(&self, reason: ValidationReason);
}

/// Notifier that writes the rejection to the trace log.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl ValidationNotifier for TracingNotifier {
    async fn notify_invalid(&self, reason: ValidationReason) {
        tracing::info!(
            target: TRACING_TARGET_NOTIFY,
            reason = %reason,
            "{}",
            reason.message()
        );
    }
}

//! Mock validation notifier for testing.

use std::sync::Mutex;

use lookup_core::{ValidationNotifier, ValidationReason};

/// Mock notifier that records every rejection it was shown.
#[derive(Debug, Default)]
pub struct MockValidationNotifier {
    reasons: Mutex<Vec<ValidationReason>>,
}

impl MockValidationNotifier {
    /// Creates a new mock notifier with no recorded notifications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reasons notified so far, in call order.
    pub fn reasons(&self) -> Vec<ValidationReason> {
        self.reasons
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns how many notifications were shown.
    pub fn call_count(&self) -> usize {
        self.reasons().len()
    }
}

#[async_trait::async_trait]
impl ValidationNotifier for MockValidationNotifier {
    async fn notify_invalid(&self, reason: ValidationReason) {
        self.reasons
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(reason);
    }
}

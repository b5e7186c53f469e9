//! Mock input source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};

use lookup_core::InputSource;

/// Mock input source returning a fixed value.
#[derive(Debug, Default)]
pub struct MockInputSource {
    value: String,
    calls: AtomicUsize,
}

impl MockInputSource {
    /// Creates a mock input source that always returns `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many times the value was requested.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl InputSource for MockInputSource {
    async fn input_value(&self) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.value.clone()
    }
}

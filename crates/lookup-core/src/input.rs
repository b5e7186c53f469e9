//! Input source abstraction.

/// Supplies the company name a submission works with.
///
/// Implementations must not fail; a missing value is reported as an empty
/// string and rejected by validation.
#[async_trait::async_trait]
pub trait InputSource: Send + Sync {
    /// Returns the current input value, possibly empty.
    async fn input_value(&self) -> String;
}

/// Input source returning a fixed value.
#[derive(Debug, Clone, Default)]
pub struct StaticInput {
    value: String,
}

impl StaticInput {
    /// Creates an input source that always returns `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Creates an input source that returns an empty value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an input source from an optional value, treating `None` as empty.
    pub fn from_option(value: Option<String>) -> Self {
        Self {
            value: value.unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl InputSource for StaticInput {
    async fn input_value(&self) -> String {
        self.value.clone()
    }
}

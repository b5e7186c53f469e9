//! Input validation rules for a submission.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, IntoStaticStr};

/// Reason an input value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationReason {
    /// The input value was empty.
    Empty,
}

impl ValidationReason {
    /// Human-readable description of the reason.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "company name must not be empty",
        }
    }
}

/// Result of validating a single input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The value may be submitted.
    Valid,
    /// The value was rejected.
    Invalid(ValidationReason),
}

impl ValidationOutcome {
    /// Returns true if the value passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validates a company name taken from the input source.
///
/// Only the empty string is rejected; whitespace is passed through untouched.
pub fn validate_value(value: &str) -> ValidationOutcome {
    if value.is_empty() {
        return ValidationOutcome::Invalid(ValidationReason::Empty);
    }

    ValidationOutcome::Valid
}

//! Structured error handling for submission operations.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

use crate::validation::ValidationReason;

/// Message carried by every network-unavailable error.
pub const NETWORK_UNAVAILABLE_MESSAGE: &str =
    "You don't have a network connection to access this data.";

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Input validation failed.
    InvalidInput,
    /// No network connection is available.
    NetworkUnavailable,
    /// Configuration error.
    Configuration,
    /// Unknown error occurred.
    #[default]
    Unknown,
}

/// Structured error type with classification.
#[must_use]
#[derive(Debug, Error)]
#[error("[{kind}]{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Primary error message.
    pub message: Option<String>,
    /// Underlying source error, if any.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Creates the error raised when the network monitor reports no connection.
    pub fn network_unavailable() -> Self {
        Self::new(ErrorKind::NetworkUnavailable).with_message(NETWORK_UNAVAILABLE_MESSAGE)
    }

    /// Creates a validation error for the given reason.
    ///
    /// The workflow itself recovers from validation failures locally; this is
    /// for callers that want to escalate a rejection into a hard failure.
    pub fn validation(reason: ValidationReason) -> Self {
        Self::new(ErrorKind::InvalidInput).with_message(reason.message())
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the source of the error.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }

    /// Returns the message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns true if this error reports a missing network connection.
    #[must_use]
    pub fn is_network_unavailable(&self) -> bool {
        self.kind == ErrorKind::NetworkUnavailable
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_error_new() {
        let error = Error::new(ErrorKind::Unknown);
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert!(error.message.is_none());
        assert!(error.source.is_none());
    }

    #[test]
    fn test_network_unavailable_message() {
        let error = Error::network_unavailable();
        assert!(error.is_network_unavailable());
        assert_eq!(
            error.message(),
            Some("You don't have a network connection to access this data.")
        );
    }

    #[test]
    fn test_error_display() {
        let error = Error::network_unavailable();

        let display_str = error.to_string();
        assert!(display_str.contains("network_unavailable"));
        assert!(display_str.contains(NETWORK_UNAVAILABLE_MESSAGE));
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation(ValidationReason::Empty);
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
        assert_eq!(error.kind_str(), "invalid_input");
        assert!(!error.is_network_unavailable());
    }

    #[test]
    fn test_configuration_with_source() {
        let source = std::io::Error::other("underlying error");
        let error = Error::configuration()
            .with_message("invalid command-line configuration")
            .with_source(source);

        assert!(error.source.is_some());
        assert_eq!(error.kind, ErrorKind::Configuration);
        assert_eq!(error.kind_str(), "configuration");
    }

    #[test]
    fn test_default() {
        assert_eq!(ErrorKind::default(), ErrorKind::Unknown);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ErrorKind::from_str("network_unavailable").unwrap(),
            ErrorKind::NetworkUnavailable
        );
        assert_eq!(
            ErrorKind::from_str("invalid_input").unwrap(),
            ErrorKind::InvalidInput
        );
        assert!(ErrorKind::from_str("timeout").is_err());
    }
}

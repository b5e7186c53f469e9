#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for workflow operations.
pub const TRACING_TARGET_WORKFLOW: &str = "lookup_core::workflow";

/// Tracing target for remote fetch operations.
pub const TRACING_TARGET_FETCH: &str = "lookup_core::fetch";

/// Tracing target for validation notifications.
pub const TRACING_TARGET_NOTIFY: &str = "lookup_core::notify";

mod collaborators;
mod error;
mod fetch;
mod input;
mod network;
mod notify;
mod validation;
mod workflow;

pub use collaborators::Collaborators;
pub use error::{BoxedError, Error, ErrorKind, NETWORK_UNAVAILABLE_MESSAGE, Result};
pub use fetch::{RemoteFetcher, TracingFetcher};
pub use input::{InputSource, StaticInput};
pub use network::{NetworkMonitor, NetworkState, StaticNetwork};
pub use notify::{TracingNotifier, ValidationNotifier};
pub use validation::{ValidationOutcome, ValidationReason, validate_value};
pub use workflow::{Submission, SubmissionWorkflow};

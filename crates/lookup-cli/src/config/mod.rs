//! CLI configuration management.
//!
//! ```text
//! Cli
//! └── submission: SubmissionConfig # Company name, network state
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.

mod submission;

use std::ffi::OsString;
use std::process;

use clap::Parser;
use lookup_core::Error;
use serde::{Deserialize, Serialize};
pub use submission::SubmissionConfig;

use crate::TRACING_TARGET_STARTUP;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "lookup")]
#[command(about = "Submit a company name for lookup")]
#[command(version)]
pub struct Cli {
    /// Collaborator configuration for the submission.
    #[clap(flatten)]
    pub submission: SubmissionConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded first so that clap's `env` lookups see its values.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the arguments cannot be parsed.
    pub fn init() -> anyhow::Result<Self> {
        Self::load_dotenv();
        Self::parse_args(std::env::args_os())
    }

    /// Parses the given arguments.
    ///
    /// `--help` and `--version` print and exit with status 0. Any other parse
    /// failure becomes a [`Configuration`](lookup_core::ErrorKind::Configuration)
    /// error so that it is reported with the generic error exit code rather
    /// than clap's own usage status.
    pub fn parse_args<I, T>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(err) if !err.use_stderr() => err.exit(),
            Err(err) => Err(Error::configuration()
                .with_message("invalid command-line configuration")
                .with_source(err)
                .into()),
        }
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs build information and configuration.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "build information"
        );

        self.submission.log();
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [
            cfg!(feature = "dotenv").then_some("dotenv"),
            cfg!(feature = "otel").then_some("otel"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

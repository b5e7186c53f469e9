#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use std::process;

use anyhow::Context;
use lookup_core::{Submission, SubmissionWorkflow};

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "lookup_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "lookup_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "lookup_cli::config";

/// Exit code when the lookup was dispatched.
const EXIT_FETCHED: i32 = 0;
/// Exit code for any error, including invalid configuration.
const EXIT_ERROR: i32 = 1;
/// Exit code when the input was rejected by validation.
const EXIT_REJECTED: i32 = 2;

#[tokio::main]
async fn main() {
    let result = run().await;
    let code = exit_code(&result);

    match result {
        Ok(Submission::Fetched { company }) => {
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                company = %company,
                "lookup dispatched"
            );
        }
        Ok(Submission::Rejected { reason }) => {
            tracing::info!(
                target: TRACING_TARGET_SHUTDOWN,
                reason = %reason,
                "input rejected"
            );
        }
        Err(error) if tracing::enabled!(tracing::Level::ERROR) => {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %format!("{error:#}"),
                "submission terminated with error"
            );
        }
        Err(error) => eprintln!("Error: {error:#}"),
    }

    process::exit(code);
}

/// Main application entry point.
async fn run() -> anyhow::Result<Submission> {
    let cli = Cli::init()?;

    telemetry::init_tracing()?;
    cli.log();

    let workflow = SubmissionWorkflow::new(cli.submission.collaborators());
    let submission = workflow.on_submit().await.context("submission failed")?;

    Ok(submission)
}

/// Maps the result of a run to the process exit code.
fn exit_code(result: &anyhow::Result<Submission>) -> i32 {
    match result {
        Ok(Submission::Fetched { .. }) => EXIT_FETCHED,
        Ok(Submission::Rejected { .. }) => EXIT_REJECTED,
        Err(_) => EXIT_ERROR,
    }
}

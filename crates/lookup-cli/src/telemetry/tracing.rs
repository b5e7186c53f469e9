//! Tracing initialization and configuration.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Initializes a human-readable subscriber for terminal use.
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]:
///
/// ```bash
/// RUST_LOG=debug lookup --company-name Acme
/// RUST_LOG=lookup_core::workflow=trace lookup --company-name Acme
/// ```
#[cfg(not(feature = "otel"))]
pub(super) fn init_tracing() -> anyhow::Result<()> {
    let layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(layer)
        .with(submission_filter()?)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))
}

/// Initializes a JSON subscriber suitable for log collectors.
///
/// Only available with the `otel` feature. Every event is emitted as one JSON
/// object per line, including the submission fields recorded by
/// `lookup-core`.
#[cfg(feature = "otel")]
pub(super) fn init_tracing_with_otel() -> anyhow::Result<()> {
    let layer = fmt::layer()
        .json()
        .with_target(true)
        .with_current_span(false);

    tracing_subscriber::registry()
        .with(layer)
        .with(submission_filter()?)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    tracing::info!("OpenTelemetry log format enabled");
    Ok(())
}

fn submission_filter() -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))
}

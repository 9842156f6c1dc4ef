//! Console logging for the simulation.
//!
//! Airplane narration is logged at `info`, the reservation protocol's steps at
//! `debug`. Configurable via the RUST_LOG environment variable, e.g.
//! `RUST_LOG=runways=debug`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `default_filter` applies when RUST_LOG is unset.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_thread_names(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .try_init()?;
    Ok(())
}

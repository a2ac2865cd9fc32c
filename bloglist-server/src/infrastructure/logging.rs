use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global JSON subscriber. Fails if one is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bloglist_server=debug"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("a global tracing subscriber is already installed")
}

//! Logging setup for the [`tracing`] crate.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the logging framework.
///
/// `RUST_LOG` wins when set; otherwise `filter_directives` is used.
/// Events go to stderr so stdout stays free for command output.
pub fn install_tracing(filter_directives: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives))
        .with_context(|| format!("Invalid log filter: {}", filter_directives))?;

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

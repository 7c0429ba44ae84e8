use anyhow::{Context, Result};
use docview::Config;
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::parse();
    docview::logging::install_tracing(&config.log_filter)?;
    config.validate().context("Invalid configuration")?;

    let summary = docview::generate_site(&config).context("Failed to generate site")?;
    info!(
        default_doc = %summary.default_key,
        "Generated: {}",
        summary.index.display()
    );

    if !config.no_open
        && let Err(e) = open::that(&summary.index)
    {
        warn!("Failed to open {} in browser: {}", summary.index.display(), e);
    }

    Ok(())
}

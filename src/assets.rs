//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::debug;

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const SIDEBAR: &str = include_str!("../assets/components/sidebar.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "docs.css", &[BASE, LAYOUT, SIDEBAR])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), &css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    debug!(asset = name, bytes = css.len(), "wrote stylesheet");
    Ok(())
}

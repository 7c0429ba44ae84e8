//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for docview.
#[derive(Debug, Clone, Parser)]
#[command(name = "docview", version, about, long_about = None)]
pub struct Config {
    /// Directory of markdown documents
    #[arg(default_value = "docs")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site title shown in the sidebar and page titles
    #[arg(long)]
    pub title: Option<String>,

    /// Document shown by index.html (defaults to the first document)
    #[arg(long = "default")]
    pub default_doc: Option<String>,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Tracing filter directives, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input path does not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input directory does not exist: {}", self.input.display());
        }
        if !self.input.is_dir() {
            bail!("Input path is not a directory: {}", self.input.display());
        }

        Ok(())
    }

    /// Returns site title from configuration or input directory name.
    ///
    /// # Errors
    ///
    /// Returns error if input path has no name component or contains invalid UTF8.
    pub fn site_title(&self) -> Result<String> {
        if let Some(title) = &self.title {
            return Ok(title.clone());
        }

        let path = self
            .input
            .canonicalize()
            .unwrap_or_else(|_| self.input.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract site title from path: {}", path.display()))
            .map(String::from)
    }
}

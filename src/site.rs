//! Static site generation.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::write_css_assets;
use crate::config::Config;
use crate::pages::doc::{self, DocPageData};
use crate::registry::DocRegistry;
use crate::util::{INDEX_PAGE, page_file_name};
use crate::viewer::{HtmlBuffer, Viewer};

/// Paths written by a site generation run.
#[derive(Debug, Clone)]
pub struct SiteSummary {
    pub index: PathBuf,
    pub pages: Vec<PathBuf>,
    pub default_key: String,
}

/// Generates the static documentation site described by `config`.
///
/// Loads the registry from the input directory and delegates to
/// [`write_site`].
///
/// # Errors
///
/// Returns error if the input directory cannot be loaded or holds no
/// markdown documents, or if any output file cannot be written.
pub fn generate_site(config: &Config) -> Result<SiteSummary> {
    let registry = DocRegistry::from_dir(&config.input).context("Failed to load documents")?;
    info!(
        documents = registry.len(),
        input = %config.input.display(),
        "loaded documentation"
    );

    let site_title = config
        .site_title()
        .context("Failed to determine site title")?;

    write_site(
        &registry,
        &site_title,
        config.default_doc.as_deref(),
        &config.output,
    )
}

/// Writes one page per document, `index.html`, and CSS assets.
///
/// Every page is produced by selecting its key in a [`Viewer`], so the
/// sidebar in each page carries exactly one active item. `index.html` is
/// the page of `default_key`, or of the first document when none is given.
///
/// # Errors
///
/// Returns error if the registry is empty, `default_key` is unknown, two
/// keys map to the same page file, a key maps to `index.html`, or an
/// output file cannot be written.
pub fn write_site(
    registry: &DocRegistry,
    site_title: &str,
    default_key: Option<&str>,
    output: &Path,
) -> Result<SiteSummary> {
    let Some(first) = registry.first() else {
        bail!("No markdown documents found");
    };

    let default_key = match default_key {
        Some(key) if registry.contains(key) => key,
        Some(key) => bail!("Default document not found: {}", key),
        None => first.key(),
    };

    let page_names = page_names(registry)?;

    fs::create_dir_all(output).context("Failed to create output directory")?;
    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let mut viewer = Viewer::new(registry, HtmlBuffer::new());
    let mut pages = Vec::with_capacity(registry.len());
    let mut index = None;

    for (document, page_name) in registry.iter().zip(&page_names) {
        viewer.select(document.key());

        let html = doc::generate(DocPageData {
            site_title,
            doc_title: document.title(),
            selectors: &viewer.selectors(),
            content_html: viewer.surface().as_str(),
        })
        .into_string();

        let page_path = output.join(page_name);
        write_page(&page_path, &html)?;
        pages.push(page_path);

        if document.key() == default_key {
            let index_path = output.join(INDEX_PAGE);
            write_page(&index_path, &html)?;
            index = Some(index_path);
        }
    }

    let index = index.context("Default document was not rendered")?;
    info!(
        pages = pages.len(),
        index = %index.display(),
        "generated documentation site"
    );

    Ok(SiteSummary {
        index,
        pages,
        default_key: default_key.to_string(),
    })
}

/// Maps every key to its page file name, in registry order.
///
/// Page names must be unique and must not shadow `index.html`, otherwise
/// one page would silently overwrite another.
fn page_names(registry: &DocRegistry) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::with_capacity(registry.len());
    let mut keys: Vec<&str> = Vec::with_capacity(registry.len());

    for key in registry.keys() {
        let name = page_file_name(key);
        if name == INDEX_PAGE {
            bail!("Document {:?} would overwrite {}", key, INDEX_PAGE);
        }
        if let Some(index) = names.iter().position(|existing| *existing == name) {
            bail!(
                "Documents {:?} and {:?} both map to page {}",
                keys[index],
                key,
                name
            );
        }
        names.push(name);
        keys.push(key);
    }

    Ok(names)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Failed to write page to {}", path.display()))?;
    debug!(path = %path.display(), "generated page");
    Ok(())
}

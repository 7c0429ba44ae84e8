//! Markdown subset renderer.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::trace;

use super::{CodeStash, Pass};

/// Renders the supported markdown subset to HTML.
///
/// Supports headers (levels 1 to 3), fenced code blocks with an optional
/// language tag, inline code, bold, flat unordered lists, paragraphs and
/// inline links. Rendering is total: malformed markup passes through as
/// text instead of failing. Only fenced code bodies are escaped, so the
/// output is not safe for untrusted input.
///
/// The renderer holds no state and can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to an HTML string.
    ///
    /// Line endings are normalized to `\n` and NUL characters become
    /// U+FFFD before the passes in [`Pass::PIPELINE`] run. Stashed code
    /// blocks are restored after the last pass.
    ///
    /// # Arguments
    ///
    /// * `source`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML fragment
    pub fn render(&self, source: &str) -> String {
        let mut stash = CodeStash::new();
        let mut text = normalize(source);

        for pass in Pass::PIPELINE {
            text = pass.apply(&text, &mut stash);
            trace!(pass = pass.name(), len = text.len(), "applied markdown pass");
        }

        stash.restore(&text)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read as UTF-8 text
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file {}", path.display()))?;
        Ok(self.render(&content))
    }
}

/// Renders `source` with a default [`MarkdownRenderer`].
pub fn render(source: &str) -> String {
    MarkdownRenderer::new().render(source)
}

fn normalize(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\0', "\u{FFFD}")
}

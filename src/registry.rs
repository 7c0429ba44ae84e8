//! Documentation content store.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File extension of loadable documents.
const MARKDOWN_EXTENSION: &str = "md";

/// A single documentation resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    key: String,
    source: String,
}

impl Document {
    pub fn new(key: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            source: source.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the text of the first `# ` header line, or the key when the
    /// document has none.
    pub fn title(&self) -> &str {
        self.source
            .lines()
            .find_map(|line| line.strip_prefix("# "))
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(self.key.as_str())
    }
}

/// Ordered mapping from resource keys to markdown sources.
///
/// Insertion order is display order. Keys are unique: inserting an
/// existing key replaces its source in place.
#[derive(Debug, Clone, Default)]
pub struct DocRegistry {
    documents: Vec<Document>,
}

impl DocRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.md` file directly inside `dir`.
    ///
    /// Keys are file stems; documents are ordered by file name. Nested
    /// directories and other files are ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be listed, a file cannot be
    /// read as UTF-8, or a file name is not valid UTF-8.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read documentation directory {}", dir.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to read entry in {}", dir.display()))?
                .path();
            let is_markdown = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION));
            if path.is_file() && is_markdown {
                paths.push(path);
            }
        }
        paths.sort();

        let mut registry = Self::new();
        for path in paths {
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                bail!("Document file name is not valid UTF8: {}", path.display());
            };
            let source = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read document {}", path.display()))?;
            debug!(key, bytes = source.len(), "loaded document");
            registry.insert(key, source);
        }

        Ok(registry)
    }

    /// Adds a document, replacing the source of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, source: impl Into<String>) {
        let document = Document::new(key, source);
        match self.documents.iter_mut().find(|d| d.key == document.key) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    /// Returns the markdown source for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.document(key).map(Document::source)
    }

    pub fn document(&self, key: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.document(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(Document::key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn first(&self) -> Option<&Document> {
        self.documents.first()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<K, S> FromIterator<(K, S)> for DocRegistry
where
    K: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (key, source) in iter {
            registry.insert(key, source);
        }
        registry
    }
}

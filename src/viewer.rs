//! Selection and display binding.
//!
//! The viewer sits between a set of selector controls (a sidebar, tabs)
//! and a display surface. Selecting a key renders the matching document
//! into the surface, moves the single active marker, and notifies the
//! registered callbacks. The viewer knows nothing about the UI technology
//! behind either side.

use tracing::debug;

use crate::markdown::MarkdownRenderer;
use crate::registry::DocRegistry;

/// Destination for rendered document HTML.
pub trait DisplaySurface {
    /// Replaces everything currently shown with `html`.
    fn replace_content(&mut self, html: &str);
}

/// In-memory display surface holding the last rendered HTML.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HtmlBuffer {
    html: String,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

impl DisplaySurface for HtmlBuffer {
    fn replace_content(&mut self, html: &str) {
        self.html.clear();
        self.html.push_str(html);
    }
}

/// One selector control as seen by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'a> {
    pub key: &'a str,
    pub title: &'a str,
    pub active: bool,
}

type SelectCallback<'a> = Box<dyn FnMut(&str) + 'a>;

/// Binds a [`DocRegistry`] to a [`DisplaySurface`].
pub struct Viewer<'a, S> {
    registry: &'a DocRegistry,
    renderer: MarkdownRenderer,
    surface: S,
    active: Option<String>,
    listeners: Vec<SelectCallback<'a>>,
}

impl<'a, S: DisplaySurface> Viewer<'a, S> {
    pub fn new(registry: &'a DocRegistry, surface: S) -> Self {
        Self {
            registry,
            renderer: MarkdownRenderer::new(),
            surface,
            active: None,
            listeners: Vec::new(),
        }
    }

    /// Registers a callback invoked with the key of every successful
    /// selection, in registration order.
    pub fn on_select(&mut self, callback: impl FnMut(&str) + 'a) {
        self.listeners.push(Box::new(callback));
    }

    /// Displays the document stored under `key`.
    ///
    /// An unknown key leaves the surface untouched and fires no callbacks,
    /// but still clears the active marker since no selector matches it.
    ///
    /// # Returns
    ///
    /// `true` when a document was rendered into the surface
    pub fn select(&mut self, key: &str) -> bool {
        let Some(source) = self.registry.get(key) else {
            debug!(key, "no document for key, display unchanged");
            self.active = None;
            return false;
        };

        let html = self.renderer.render(source);
        self.surface.replace_content(&html);
        self.active = Some(key.to_string());
        debug!(key, bytes = html.len(), "displayed document");

        for listener in &mut self.listeners {
            listener(key);
        }

        true
    }

    /// Key of the most recently selected document.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Returns one selector per registry document, in registry order, with
    /// at most one marked active.
    pub fn selectors(&self) -> Vec<Selector<'a>> {
        self.registry
            .iter()
            .map(|document| Selector {
                key: document.key(),
                title: document.title(),
                active: self.active.as_deref() == Some(document.key()),
            })
            .collect()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

//! Markdown subset rendering.
//!
//! This module converts a restricted markdown dialect (headers, fenced and
//! inline code, bold, flat lists, paragraphs, links) into HTML through an
//! ordered list of text passes. Fenced code bodies are the only escaped
//! content; everything else is inserted verbatim.

mod passes;
mod renderer;
mod stash;

pub use passes::Pass;
pub use renderer::{MarkdownRenderer, render};
pub use stash::CodeStash;

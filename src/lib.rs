//! Static documentation viewer built on a small markdown renderer.

mod assets;
pub mod components;
mod config;
pub mod logging;
pub mod markdown;
pub mod pages;
mod registry;
mod site;
mod util;
mod viewer;

pub use assets::write_css_assets;
pub use config::Config;
pub use markdown::{CodeStash, MarkdownRenderer, Pass, render};
pub use registry::{DocRegistry, Document};
pub use site::{SiteSummary, generate_site, write_site};
pub use util::page_file_name;
pub use viewer::{DisplaySurface, HtmlBuffer, Selector, Viewer};

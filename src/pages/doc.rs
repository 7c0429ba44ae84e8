//! Documentation page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::sidebar::sidebar;
use crate::viewer::Selector;

/// Stylesheets linked by every documentation page, relative to site root.
const STYLESHEETS: [&str; 2] = ["assets/docs.css", "assets/markdown.css"];

/// Data container for documentation page generation
pub struct DocPageData<'a> {
    pub site_title: &'a str,
    pub doc_title: &'a str,
    pub selectors: &'a [Selector<'a>],
    pub content_html: &'a str,
}

/// Generates a documentation page
///
/// Places the sidebar next to the content area. The content HTML is the
/// renderer's output and is inserted without escaping, as the display
/// surface in a live viewer would.
///
/// # Arguments
///
/// * `data`: Page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for the page
pub fn generate(data: DocPageData<'_>) -> Markup {
    page_wrapper(
        data.doc_title,
        data.site_title,
        &STYLESHEETS,
        html! {
            (sidebar(data.site_title, data.selectors))
            main class="content" {
                article id="doc-content" class="markdown-body" {
                    (PreEscaped(data.content_html))
                }
            }
        },
    )
}

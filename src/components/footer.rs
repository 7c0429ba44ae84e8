//! Page footer component

use maud::{Markup, html};

/// Renders the generator attribution footer shared by all pages
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            "Generated by docview " (env!("CARGO_PKG_VERSION"))
        }
    }
}

//! Resource sidebar component

use maud::{Markup, html};

use crate::util::page_file_name;
use crate::viewer::Selector;

/// Renders the sidebar of resource selectors
///
/// Emits one `sidebar-item` link per selector, in order. The selector
/// flagged active carries the `active` class and `aria-current`, so at most
/// one item is highlighted. Each item records its key in `data-resource`
/// and links to the generated page for that key.
///
/// # Arguments
///
/// * `site_title`: Heading shown above the list
/// * `selectors`: Resource selectors in display order
///
/// # Returns
///
/// Sidebar navigation markup
pub fn sidebar(site_title: &str, selectors: &[Selector<'_>]) -> Markup {
    html! {
        nav class="sidebar" {
            div class="sidebar-title" { (site_title) }
            ul class="sidebar-list" {
                @for selector in selectors {
                    li {
                        @if selector.active {
                            a class="sidebar-item active" href=(page_file_name(selector.key))
                                data-resource=(selector.key) aria-current="page" {
                                (selector.title)
                            }
                        } @else {
                            a class="sidebar-item" href=(page_file_name(selector.key))
                                data-resource=(selector.key) {
                                (selector.title)
                            }
                        }
                    }
                }
            }
        }
    }
}

//! Reusable HTML components for page generation
//!
//! Maud component functions shared by every generated page: the document
//! shell, the sidebar of resource selectors, and the footer.

pub mod footer;
pub mod layout;
pub mod sidebar;

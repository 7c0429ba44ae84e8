//! Page generation modules
//!
//! Each page module composes shared components from the components module
//! into one page type.

pub mod doc;

//! Presentation: page templates, built-in copy, and the small bits of UI state
//! (carousel index, masonry columns) the templates need.

pub mod carousel;
pub mod content;
pub mod masonry;
pub mod pages;

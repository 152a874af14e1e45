//! UI components built with Leptos.
//!
//! - [`RepoViewer`] - Repository viewer window (list and content tree)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod viewer;

pub use viewer::RepoViewer;

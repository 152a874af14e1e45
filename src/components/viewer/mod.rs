//! Repository viewer window.
//!
//! Components:
//! - [`RepoViewer`] - Window chrome, switches between list and detail
//! - [`RepoList`] - Grid of repository cards
//! - [`RepoDetail`] - Selected repository with its content tree
//! - [`ContentTree`] - Lazily expanded directory tree

mod content_tree;
mod link;
mod repo_detail;
mod repo_list;
#[allow(clippy::module_inception)]
mod viewer;

pub use content_tree::ContentTree;
pub use repo_detail::RepoDetail;
pub use repo_list::RepoList;
pub use viewer::RepoViewer;

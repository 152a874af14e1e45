//! Platform-independent core of the repository viewer.
//!
//! Provides:
//! - [`Entry`], [`EntryKind`], [`Repo`] - listing data model
//! - [`ListingProvider`] - seam to the remote source-tree API
//! - [`TreeMaterializer`] - lazily expanded directory tree
//! - [`GitHubApi`] - endpoint builder for the GitHub REST API
//!
//! Nothing in this crate performs I/O; front ends supply a
//! [`ListingProvider`] backed by whatever HTTP stack their platform has.

pub mod error;
pub mod github;
mod models;
pub mod provider;
pub mod tree;

pub use error::ProviderError;
pub use github::GitHubApi;
pub use models::{Entry, EntryKind, Repo};
pub use provider::{ListingProvider, parse_listing, parse_repos};
pub use tree::{FetchTicket, RootTicket, Toggle, TreeMaterializer, TreeNode, TreeRow};

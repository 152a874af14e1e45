//! Data models for repository listings.
//!
//! - [`Entry`], [`EntryKind`] - one node of a source tree
//! - [`Repo`] - one repository card

mod entry;
mod repo;

pub(crate) use entry::ContentItem;
pub use entry::{Entry, EntryKind};
pub use repo::Repo;

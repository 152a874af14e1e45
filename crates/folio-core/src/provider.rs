//! Listing provider seam and payload decoding.
//!
//! A [`ListingProvider`] answers two questions: what is at the root of a
//! container, and what is inside a directory. Front ends implement it over
//! their platform's HTTP stack and decode bodies with [`parse_listing`].

use serde_json::Value;

use crate::error::ProviderError;
use crate::models::{ContentItem, Entry, Repo};

/// Read-only source of directory listings.
///
/// Futures are not required to be `Send`: the browser provider holds
/// JavaScript promises across await points.
#[allow(async_fn_in_trait)]
pub trait ListingProvider {
    /// List the root of a container (a repository name).
    async fn list_root(&self, container: &str) -> Result<Vec<Entry>, ProviderError>;

    /// List the children of a directory by its `source_ref`.
    async fn list_children(&self, source_ref: &str) -> Result<Vec<Entry>, ProviderError>;
}

/// Decode a directory listing body.
///
/// The API answers a missing path or an exhausted rate limit with a JSON
/// object instead of an array; that is reported as [`ProviderError::NotAList`].
pub fn parse_listing(body: &str) -> Result<Vec<Entry>, ProviderError> {
    let items: Vec<ContentItem> = decode_array(body)?;
    Ok(items.into_iter().map(Entry::from).collect())
}

/// Decode a repository list body, newest repository first.
pub fn parse_repos(body: &str) -> Result<Vec<Repo>, ProviderError> {
    let mut repos: Vec<Repo> = decode_array(body)?;
    repos.sort_by(|a, b| b.id.cmp(&a.id));
    Ok(repos)
}

fn decode_array<T: serde::de::DeserializeOwned>(body: &str) -> Result<Vec<T>, ProviderError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(ProviderError::NotAList);
    }
    Ok(serde_json::from_value(value)?)
}

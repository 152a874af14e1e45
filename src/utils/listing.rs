//! Browser-side listing provider.

use folio_core::{
    Entry, GitHubApi, ListingProvider, ProviderError, Repo, parse_listing, parse_repos,
};

use super::fetch::fetch_text;
use crate::config;

/// Fetches repository listings from the GitHub REST API in the browser.
#[derive(Clone, Debug)]
pub struct BrowserListing {
    api: GitHubApi,
}

impl BrowserListing {
    pub fn new(api: GitHubApi) -> Self {
        Self { api }
    }

    /// Provider for the configured owner.
    pub fn from_config() -> Self {
        Self::new(config::github_api())
    }

    /// Public repositories of the owner, newest first.
    pub async fn list_repos(&self) -> Result<Vec<Repo>, ProviderError> {
        let body = fetch_text(&self.api.repos_url()).await?;
        parse_repos(&body)
    }
}

impl ListingProvider for BrowserListing {
    async fn list_root(&self, container: &str) -> Result<Vec<Entry>, ProviderError> {
        let body = fetch_text(&self.api.contents_url(container)).await?;
        parse_listing(&body)
    }

    async fn list_children(&self, source_ref: &str) -> Result<Vec<Entry>, ProviderError> {
        let body = fetch_text(source_ref).await?;
        parse_listing(&body)
    }
}

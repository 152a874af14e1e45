//! Listing provider over `reqwest`.

use std::time::Duration;

use folio_core::{
    Entry, GitHubApi, ListingProvider, ProviderError, Repo, parse_listing, parse_repos,
};
use log::debug;
use reqwest::header::ACCEPT;

/// Request timeout, matching the browser front end.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub requires a User-Agent on every API request.
const USER_AGENT: &str = concat!("folio-cli/", env!("CARGO_PKG_VERSION"));

/// Media type of the GitHub REST API.
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Fetches listings from the GitHub REST API.
pub struct HttpProvider {
    client: reqwest::Client,
    api: GitHubApi,
}

impl HttpProvider {
    pub fn new(api: GitHubApi) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self { client, api })
    }

    /// Public repositories of the configured owner, newest first.
    pub async fn list_repos(&self) -> Result<Vec<Repo>, ProviderError> {
        let body = self.get_text(&self.api.repos_url()).await?;
        parse_repos(&body)
    }

    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Http(status.as_u16()));
        }

        response.text().await.map_err(classify)
    }
}

impl ListingProvider for HttpProvider {
    async fn list_root(&self, container: &str) -> Result<Vec<Entry>, ProviderError> {
        let body = self.get_text(&self.api.contents_url(container)).await?;
        parse_listing(&body)
    }

    async fn list_children(&self, source_ref: &str) -> Result<Vec<Entry>, ProviderError> {
        let body = self.get_text(source_ref).await?;
        parse_listing(&body)
    }
}

fn classify(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(err.to_string())
    }
}

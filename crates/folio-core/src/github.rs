//! GitHub REST API endpoints.

/// Public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Endpoint builder for one repository owner.
///
/// Container references handed to the tree are repository names; directory
/// `source_ref`s are absolute URLs taken from the listings themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitHubApi {
    api_base: String,
    owner: String,
}

impl GitHubApi {
    /// Endpoints on the public API.
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_base(DEFAULT_API_BASE, owner)
    }

    /// Endpoints on a custom API base (GitHub Enterprise, a proxy, a mock).
    pub fn with_base(api_base: impl Into<String>, owner: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            api_base,
            owner: owner.into(),
        }
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Public repositories of the owner.
    pub fn repos_url(&self) -> String {
        format!("{}/users/{}/repos", self.api_base, self.owner)
    }

    /// Root listing of one repository.
    pub fn contents_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/{}/contents", self.api_base, self.owner, repo)
    }
}

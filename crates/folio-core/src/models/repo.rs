use serde::Deserialize;

/// A public repository as returned by the user repository listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Repo {
    /// Numeric id; higher ids are newer repositories
    pub id: u64,
    /// Repository name, also the container reference for its tree
    pub name: String,
    /// Repository page
    pub html_url: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Live demo URL
    #[serde(default)]
    pub homepage: Option<String>,
    /// Primary language
    #[serde(default)]
    pub language: Option<String>,
}

impl Repo {
    /// Live demo URL, if one is set.
    ///
    /// The API reports an unset homepage as either `null` or `""`.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|url| !url.trim().is_empty())
    }
}

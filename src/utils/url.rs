//! Outgoing link validation.
//!
//! Links in listings come from a remote API; only `http(s)` links to
//! allow-listed domains are rendered as anchors.

use crate::config::ALLOWED_REDIRECT_DOMAINS;

/// Result of URL validation
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidation {
    /// URL is valid and safe to open
    Valid(String),
    /// URL is invalid or unsafe
    Invalid(UrlValidationError),
}

impl UrlValidation {
    /// The validated URL, if any.
    pub fn into_valid(self) -> Option<String> {
        match self {
            Self::Valid(url) => Some(url),
            Self::Invalid(_) => None,
        }
    }
}

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValidationError {
    /// URL is empty
    Empty,
    /// URL doesn't start with http:// or https://
    InvalidProtocol,
    /// URL has no host/domain
    NoHost,
    /// Domain is not in the allowed list
    DomainNotAllowed(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL is empty"),
            Self::InvalidProtocol => write!(f, "URL must start with http:// or https://"),
            Self::NoHost => write!(f, "URL has no host"),
            Self::DomainNotAllowed(domain) => write!(f, "Domain '{}' is not allowed", domain),
        }
    }
}

/// Validate a URL before rendering it as a link.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a valid host
/// 4. Host is in the allowed domains list
pub fn validate_redirect_url(url: &str) -> UrlValidation {
    let url = url.trim();

    if url.is_empty() {
        return UrlValidation::Invalid(UrlValidationError::Empty);
    }

    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return UrlValidation::Invalid(UrlValidationError::InvalidProtocol);
    }

    let Some(host) = extract_host(&url_lower) else {
        return UrlValidation::Invalid(UrlValidationError::NoHost);
    };

    if !is_domain_allowed(&host) {
        return UrlValidation::Invalid(UrlValidationError::DomainNotAllowed(host));
    }

    UrlValidation::Valid(url.to_string())
}

/// Extract the lowercase host from a lowercase URL.
fn extract_host(url: &str) -> Option<String> {
    let without_protocol = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;

    // Host part ends at the first path, query or fragment delimiter.
    // Browsers read `\` as a path separator in http(s) URLs.
    let authority = without_protocol.split(['/', '\\', '?', '#']).next()?;

    // Drop credentials and port
    let host = authority.rsplit('@').next()?;
    let host = host.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_string())
}

/// Check if a domain or one of its parents is in the allowed list.
fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_REDIRECT_DOMAINS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{}", allowed)))
}

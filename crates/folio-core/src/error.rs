//! Error types for listing providers.
//!
//! [`ProviderError`] covers every way a root or child listing can fail.
//! The tree never propagates it: a failed listing degrades to an empty
//! result and is only logged.

use thiserror::Error;

/// Network or payload failure while listing a container or directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Request could not be sent or the connection failed (CORS, DNS, ...)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx HTTP response
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Request timed out
    #[error("request timed out")]
    Timeout,
    /// Body is not valid JSON or does not match the entry shape
    #[error("JSON parse error: {0}")]
    Parse(String),
    /// Body is valid JSON but not an array (e.g. an API error document)
    #[error("listing payload is not a list")]
    NotAList,
    /// The platform offers no way to issue the request
    #[error("listing backend not available")]
    Unavailable,
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ProviderError::Http(404).to_string(), "HTTP error: 404");
        assert_eq!(ProviderError::Timeout.to_string(), "request timed out");
        assert_eq!(
            ProviderError::NotAList.to_string(),
            "listing payload is not a list"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(ProviderError::from(err), ProviderError::Parse(_)));
    }
}

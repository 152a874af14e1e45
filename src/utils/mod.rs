//! Utility modules for web and network operations.
//!
//! Provides:
//! - [`BrowserListing`] - Listing provider over the Fetch API
//! - [`validate_redirect_url`] - URL security validation
//! - [`logger`] - Browser console backend for `log`

mod fetch;
mod listing;
pub mod logger;
mod url;

pub use listing::BrowserListing;
pub use url::validate_redirect_url;

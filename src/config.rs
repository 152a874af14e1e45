//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use folio_core::GitHubApi;
use log::LevelFilter;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name.
pub const APP_NAME: &str = "folio";

/// Window title while the repository list is shown.
pub const REPO_LIST_TITLE: &str = "Projects";

// =============================================================================
// GitHub Configuration
// =============================================================================

/// Owner whose public repositories are shown.
pub const GITHUB_OWNER: &str = "Khalifa787";

/// Base URL of the GitHub REST API.
pub const GITHUB_API_BASE: &str = folio_core::github::DEFAULT_API_BASE;

/// Endpoints for the configured owner.
pub fn github_api() -> GitHubApi {
    GitHubApi::with_base(GITHUB_API_BASE, GITHUB_OWNER)
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Allowed domains for outgoing links (security).
/// Links to other domains are rendered as plain text.
pub const ALLOWED_REDIRECT_DOMAINS: &[&str] = &[
    "github.com",
    "github.io",
    "githubusercontent.com",
    "vercel.app",
    "netlify.app",
    "pages.dev",
    "linkedin.com",
];

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Warn
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Horizontal indentation per tree level, in rem.
pub const TREE_INDENT_REM: f32 = 1.0;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

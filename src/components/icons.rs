//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuExternalLink as ExternalLink, LuFile as File,
        LuFolder as Folder, LuFolderOpen as FolderOpen, LuGithub as GitHub, LuLink as Link,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronDown as ChevronDown,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFolder2Open as FolderOpen, BsFolderFill as Folder, BsGithub as GitHub,
        BsLink45deg as Link,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(GITHUB, GitHub);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(LINK, Link);

use serde::Deserialize;

// =============================================================================
// Entry
// =============================================================================

/// Kind of a source-tree node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

/// One file-system-like node of a remote source tree.
///
/// # Path Convention
///
/// - Full path from the tree root, segments separated by `/`
/// - No leading or trailing slashes, no empty segments
/// - Root-level entries have no `/` at all (`"README.md"`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Leaf segment shown to the user
    pub name: String,
    /// Full slash-delimited path, unique within a tree
    pub path: String,
    /// File or directory
    pub kind: EntryKind,
    /// Listing locator for the children (directories only)
    pub source_ref: Option<String>,
    /// Page to open when the entry is clicked
    pub external_link: Option<String>,
}

impl Entry {
    /// Create a file entry. The name is the last path segment.
    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: leaf_name(&path),
            path,
            kind: EntryKind::File,
            source_ref: None,
            external_link: None,
        }
    }

    /// Create a directory entry whose children are listed at `source_ref`.
    pub fn directory(path: impl Into<String>, source_ref: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: leaf_name(&path),
            path,
            kind: EntryKind::Directory,
            source_ref: Some(source_ref.into()),
            external_link: None,
        }
    }

    /// Attach an external link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    /// Check if this entry is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Path of the directory containing this entry (`""` for root-level).
    pub fn parent(&self) -> &str {
        self.path
            .rsplit_once('/')
            .map(|(parent, _)| parent)
            .unwrap_or("")
    }

    /// Check that the path follows the path convention.
    pub fn has_valid_path(&self) -> bool {
        !self.path.is_empty() && self.path.split('/').all(|segment| !segment.is_empty())
    }
}

fn leaf_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

// =============================================================================
// Wire Format
// =============================================================================

/// One item of a GitHub Contents API directory listing.
///
/// Only the fields the tree needs are decoded; the API sends many more.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ContentItem {
    pub name: String,
    pub path: String,
    /// `"file"`, `"dir"`, `"symlink"` or `"submodule"`
    #[serde(rename = "type")]
    pub item_type: String,
    /// API URL listing this item
    pub url: Option<String>,
    /// Browser URL for this item
    pub html_url: Option<String>,
}

impl From<ContentItem> for Entry {
    fn from(item: ContentItem) -> Self {
        // Symlinks and submodules cannot be listed as directories.
        let kind = if item.item_type == "dir" {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let source_ref = match kind {
            EntryKind::Directory => item.url,
            EntryKind::File => None,
        };
        Self {
            name: item.name,
            path: item.path,
            kind,
            source_ref,
            external_link: item.html_url,
        }
    }
}

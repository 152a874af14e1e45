//! Lazily materialized directory tree.
//!
//! [`TreeMaterializer`] accumulates listing entries as directories are
//! expanded and derives a nested view from them on demand.
//!
//! # State
//!
//! - Entries are append-only and unique by path; the first listing that
//!   reports a path wins and later duplicates are dropped.
//! - Collapsing only hides children, it never discards them.
//! - [`TreeMaterializer::begin_load_root`] is the only way entries go away.
//!
//! # Fetching
//!
//! Every mutation that needs the network is split in two synchronous halves
//! around the await: `begin_*` hands out a ticket, `complete_*` merges the
//! result. No borrow is held across the await, so a host can keep several
//! child fetches in flight and merge them in completion order. The async
//! [`TreeMaterializer::load_root`] and [`TreeMaterializer::toggle`] run both
//! halves back to back for hosts that don't need that.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::error::ProviderError;
use crate::models::Entry;
use crate::provider::ListingProvider;

// =============================================================================
// Derived Views
// =============================================================================

/// One node of the nested view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub entry: Entry,
    /// Directory is expanded (children, if fetched, are listed below)
    pub expanded: bool,
    /// Visible children in accumulation order
    pub children: Vec<TreeNode>,
}

/// One visible row of the flattened view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub entry: Entry,
    /// Nesting level, 0 for root-level entries
    pub depth: usize,
    pub expanded: bool,
}

// =============================================================================
// Tickets
// =============================================================================

/// Outstanding root listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootTicket {
    container: String,
    generation: u64,
}

impl RootTicket {
    #[inline]
    pub fn container(&self) -> &str {
        &self.container
    }
}

/// Outstanding child listing for one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    path: String,
    source_ref: String,
    generation: u64,
}

impl FetchTicket {
    /// Path of the directory being expanded.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Locator to hand to [`ListingProvider::list_children`].
    #[inline]
    pub fn source_ref(&self) -> &str {
        &self.source_ref
    }
}

/// Outcome of [`TreeMaterializer::begin_toggle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// Path was expanded and is now collapsed; nothing to fetch.
    Collapsed,
    /// Children must be fetched, then passed to
    /// [`TreeMaterializer::complete_fetch`].
    Fetch(FetchTicket),
    /// Nothing to do: unknown path, file, or a fetch already in flight.
    Ignored,
}

// =============================================================================
// TreeMaterializer
// =============================================================================

/// Flat entry collection plus expansion state for one open tree.
#[derive(Clone, Debug, Default)]
pub struct TreeMaterializer {
    /// Container whose root was last requested
    container: Option<String>,
    /// Entries in accumulation order
    entries: Vec<Entry>,
    /// Path -> index into `entries`
    by_path: HashMap<String, usize>,
    /// Parent path -> indices of direct children, in accumulation order
    by_parent: HashMap<String, Vec<usize>>,
    /// Directories currently shown expanded
    expanded: HashSet<String>,
    /// Directories with a child fetch in flight
    pending: HashSet<String>,
    /// Bumped on every root load and close; tickets from older
    /// generations are discarded on completion
    generation: u64,
}

impl TreeMaterializer {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Container whose root was last requested.
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Number of accumulated entries (visible or not).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All accumulated entries in accumulation order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by path.
    pub fn entry(&self, path: &str) -> Option<&Entry> {
        self.by_path.get(path).map(|&index| &self.entries[index])
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Check if a child fetch for `path` is in flight.
    pub fn is_pending(&self, path: &str) -> bool {
        self.pending.contains(path)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Discard everything. Fetches still in flight will be dropped.
    pub fn close(&mut self) {
        self.generation += 1;
        self.container = None;
        self.entries.clear();
        self.by_path.clear();
        self.by_parent.clear();
        self.expanded.clear();
        self.pending.clear();
    }

    /// Start loading the root of `container`.
    ///
    /// The tree is emptied immediately; the root listing lands with
    /// [`Self::complete_load_root`].
    pub fn begin_load_root(&mut self, container: &str) -> RootTicket {
        self.close();
        self.container = Some(container.to_string());
        debug!("loading root of {container}");

        RootTicket {
            container: container.to_string(),
            generation: self.generation,
        }
    }

    /// Merge a root listing. Returns the number of entries added.
    ///
    /// A failed listing leaves the tree empty.
    pub fn complete_load_root(
        &mut self,
        ticket: RootTicket,
        result: Result<Vec<Entry>, ProviderError>,
    ) -> usize {
        if ticket.generation != self.generation {
            debug!("dropping stale root listing of {}", ticket.container);
            return 0;
        }

        match result {
            Ok(batch) => self.merge(batch),
            Err(err) => {
                warn!("root listing of {} failed: {err}", ticket.container);
                0
            }
        }
    }

    /// Load the root of `container`, replacing the whole tree.
    pub async fn load_root<P>(&mut self, container: &str, provider: &P) -> usize
    where
        P: ListingProvider + ?Sized,
    {
        let ticket = self.begin_load_root(container);
        let result = provider.list_root(container).await;
        self.complete_load_root(ticket, result)
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Start toggling `path`.
    ///
    /// - Expanded directory: collapsed on the spot.
    /// - Collapsed directory: a [`FetchTicket`] is issued and the path stays
    ///   collapsed until [`Self::complete_fetch`].
    /// - Directory with a fetch in flight, file, or unknown path: ignored.
    pub fn begin_toggle(&mut self, path: &str) -> Toggle {
        if self.expanded.remove(path) {
            debug!("collapsed {path}");
            return Toggle::Collapsed;
        }
        if self.pending.contains(path) {
            debug!("fetch for {path} already in flight");
            return Toggle::Ignored;
        }

        let Some(entry) = self.entry(path) else {
            return Toggle::Ignored;
        };
        if !entry.is_dir() {
            return Toggle::Ignored;
        }
        let Some(source_ref) = entry.source_ref.clone() else {
            warn!("directory {path} has no listing locator");
            return Toggle::Ignored;
        };

        self.pending.insert(path.to_string());
        Toggle::Fetch(FetchTicket {
            path: path.to_string(),
            source_ref,
            generation: self.generation,
        })
    }

    /// Merge a child listing and mark its directory expanded.
    ///
    /// Returns the number of entries added. A failed listing adds nothing
    /// but still expands the directory.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Entry>, ProviderError>,
    ) -> usize {
        if ticket.generation != self.generation {
            debug!("dropping stale listing of {}", ticket.path);
            return 0;
        }
        self.pending.remove(&ticket.path);

        let added = match result {
            Ok(batch) => self.merge(batch),
            Err(err) => {
                warn!("listing of {} failed: {err}", ticket.path);
                0
            }
        };
        self.expanded.insert(ticket.path);
        added
    }

    /// Toggle `path`, fetching its children if it gets expanded.
    pub async fn toggle<P>(&mut self, path: &str, provider: &P) -> Toggle
    where
        P: ListingProvider + ?Sized,
    {
        let action = self.begin_toggle(path);
        if let Toggle::Fetch(ticket) = &action {
            let result = provider.list_children(ticket.source_ref()).await;
            self.complete_fetch(ticket.clone(), result);
        }
        action
    }

    /// Append entries not seen before. Returns the number added.
    fn merge(&mut self, batch: Vec<Entry>) -> usize {
        let mut added = 0;

        for entry in batch {
            if !entry.has_valid_path() {
                warn!("skipping entry with malformed path {:?}", entry.path);
                continue;
            }
            if self.by_path.contains_key(&entry.path) {
                continue;
            }

            let index = self.entries.len();
            self.by_parent
                .entry(entry.parent().to_string())
                .or_default()
                .push(index);
            self.by_path.insert(entry.path.clone(), index);
            self.entries.push(entry);
            added += 1;
        }

        debug!("merged {added} entries ({} total)", self.entries.len());
        added
    }

    // -------------------------------------------------------------------------
    // Derived Views
    // -------------------------------------------------------------------------

    /// Nested view of the direct children of `prefix`.
    ///
    /// `prefix` is `""` for the root or a directory path followed by `/`
    /// (`"src/"`). Children are the entries exactly one segment below it,
    /// in accumulation order; expanded directories carry their own children.
    /// A non-empty prefix without the trailing `/` names no directory and
    /// yields nothing.
    pub fn derive(&self, prefix: &str) -> Vec<TreeNode> {
        match parent_key(prefix) {
            Some(parent) => self.derive_under(parent),
            None => Vec::new(),
        }
    }

    fn derive_under(&self, parent: &str) -> Vec<TreeNode> {
        let Some(indices) = self.by_parent.get(parent) else {
            return Vec::new();
        };

        indices
            .iter()
            .map(|&index| {
                let entry = &self.entries[index];
                let expanded = entry.is_dir() && self.expanded.contains(&entry.path);
                // Child paths are strictly longer than their parent's, so
                // this recursion always terminates.
                let children = if expanded {
                    self.derive_under(&entry.path)
                } else {
                    Vec::new()
                };
                TreeNode {
                    entry: entry.clone(),
                    expanded,
                    children,
                }
            })
            .collect()
    }

    /// Visible rows of the whole tree in pre-order.
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        flatten(self.derive(""), 0, &mut rows);
        rows
    }
}

/// Map a derive prefix to the parent path used as index key.
fn parent_key(prefix: &str) -> Option<&str> {
    if prefix.is_empty() {
        return Some("");
    }
    prefix.strip_suffix('/').filter(|dir| !dir.is_empty())
}

fn flatten(nodes: Vec<TreeNode>, depth: usize, rows: &mut Vec<TreeRow>) {
    for node in nodes {
        rows.push(TreeRow {
            entry: node.entry,
            depth,
            expanded: node.expanded,
        });
        flatten(node.children, depth + 1, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(path: &str) -> Entry {
        Entry::directory(path, format!("list:{path}"))
    }

    fn loaded(root: Vec<Entry>) -> TreeMaterializer {
        let mut tree = TreeMaterializer::new();
        let ticket = tree.begin_load_root("repo");
        tree.complete_load_root(ticket, Ok(root));
        tree
    }

    fn expand(tree: &mut TreeMaterializer, path: &str, children: Vec<Entry>) -> usize {
        match tree.begin_toggle(path) {
            Toggle::Fetch(ticket) => tree.complete_fetch(ticket, Ok(children)),
            other => panic!("expected fetch for {path}, got {other:?}"),
        }
    }

    fn paths(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.entry.path.as_str()).collect()
    }

    // =========================================================================
    // Root Loading
    // =========================================================================

    #[test]
    fn test_load_root_replaces_everything() {
        let mut tree = loaded(vec![dir("src"), Entry::file("README.md")]);
        expand(&mut tree, "src", vec![Entry::file("src/main.rs")]);
        assert_eq!(tree.len(), 3);

        let ticket = tree.begin_load_root("other");
        assert!(tree.is_empty());
        assert!(!tree.is_expanded("src"));
        assert_eq!(tree.container(), Some("other"));

        tree.complete_load_root(ticket, Ok(vec![Entry::file("Cargo.toml")]));
        assert_eq!(paths(&tree.derive("")), ["Cargo.toml"]);
    }

    #[test]
    fn test_load_root_failure_leaves_empty_tree() {
        let mut tree = TreeMaterializer::new();
        let ticket = tree.begin_load_root("repo");
        let added = tree.complete_load_root(ticket, Err(ProviderError::NotAList));

        assert_eq!(added, 0);
        assert!(tree.is_empty());
        assert!(tree.derive("").is_empty());
    }

    #[test]
    fn test_load_root_drops_duplicate_paths() {
        let tree = loaded(vec![Entry::file("a"), Entry::file("b"), dir("a")]);
        assert_eq!(tree.len(), 2);
        assert!(!tree.entry("a").unwrap().is_dir());
    }

    #[test]
    fn test_stale_root_listing_dropped() {
        let mut tree = TreeMaterializer::new();
        let first = tree.begin_load_root("first");
        let second = tree.begin_load_root("second");

        assert_eq!(tree.complete_load_root(first, Ok(vec![Entry::file("old")])), 0);
        tree.complete_load_root(second, Ok(vec![Entry::file("new")]));
        assert_eq!(paths(&tree.derive("")), ["new"]);
    }

    // =========================================================================
    // Toggle
    // =========================================================================

    #[test]
    fn test_toggle_directory_issues_fetch() {
        let mut tree = loaded(vec![dir("src")]);
        let Toggle::Fetch(ticket) = tree.begin_toggle("src") else {
            panic!("expected fetch");
        };
        assert_eq!(ticket.path(), "src");
        assert_eq!(ticket.source_ref(), "list:src");
        assert!(tree.is_pending("src"));
        assert!(!tree.is_expanded("src"));

        tree.complete_fetch(ticket, Ok(vec![Entry::file("src/lib.rs")]));
        assert!(!tree.is_pending("src"));
        assert!(tree.is_expanded("src"));
    }

    #[test]
    fn test_toggle_file_is_noop() {
        let mut tree = loaded(vec![Entry::file("README.md")]);
        assert_eq!(tree.begin_toggle("README.md"), Toggle::Ignored);
        assert!(!tree.is_expanded("README.md"));
    }

    #[test]
    fn test_toggle_unknown_path_is_noop() {
        let mut tree = loaded(vec![dir("src")]);
        assert_eq!(tree.begin_toggle("nope"), Toggle::Ignored);
    }

    #[test]
    fn test_toggle_directory_without_locator_is_noop() {
        let mut bare = dir("src");
        bare.source_ref = None;
        let mut tree = loaded(vec![bare]);
        assert_eq!(tree.begin_toggle("src"), Toggle::Ignored);
    }

    #[test]
    fn test_toggle_while_pending_is_ignored() {
        let mut tree = loaded(vec![dir("src")]);
        let first = tree.begin_toggle("src");
        assert!(matches!(first, Toggle::Fetch(_)));
        assert_eq!(tree.begin_toggle("src"), Toggle::Ignored);
    }

    #[test]
    fn test_collapse_preserves_entries() {
        let mut tree = loaded(vec![dir("src"), Entry::file("README.md")]);
        let before = tree.derive("");

        expand(&mut tree, "src", vec![Entry::file("src/lib.rs")]);
        let after_expand = tree.entries().to_vec();

        assert_eq!(tree.begin_toggle("src"), Toggle::Collapsed);
        assert_eq!(tree.entries(), after_expand.as_slice());
        assert_eq!(tree.derive(""), before);
        // Children stay reachable by prefix even while hidden.
        assert_eq!(paths(&tree.derive("src/")), ["src/lib.rs"]);
    }

    #[test]
    fn test_reexpand_fetches_again_without_duplicates() {
        let mut tree = loaded(vec![dir("src")]);
        expand(&mut tree, "src", vec![Entry::file("src/a.rs")]);
        tree.begin_toggle("src");

        let added = expand(
            &mut tree,
            "src",
            vec![Entry::file("src/a.rs"), Entry::file("src/b.rs")],
        );
        assert_eq!(added, 1);
        assert_eq!(tree.len(), 3);
        assert_eq!(paths(&tree.derive("src/")), ["src/a.rs", "src/b.rs"]);
    }

    #[test]
    fn test_failed_fetch_still_expands() {
        let mut tree = loaded(vec![dir("src")]);
        let Toggle::Fetch(ticket) = tree.begin_toggle("src") else {
            panic!("expected fetch");
        };
        let added = tree.complete_fetch(ticket, Err(ProviderError::Http(500)));

        assert_eq!(added, 0);
        assert!(tree.is_expanded("src"));
        assert!(!tree.is_pending("src"));
        let root = tree.derive("");
        assert!(root[0].expanded);
        assert!(root[0].children.is_empty());
    }

    #[test]
    fn test_completion_order_merge() {
        let mut tree = loaded(vec![dir("a"), dir("b")]);
        let Toggle::Fetch(ticket_a) = tree.begin_toggle("a") else {
            panic!("expected fetch");
        };
        let Toggle::Fetch(ticket_b) = tree.begin_toggle("b") else {
            panic!("expected fetch");
        };

        // b completes first.
        tree.complete_fetch(ticket_b, Ok(vec![Entry::file("b/2")]));
        tree.complete_fetch(ticket_a, Ok(vec![Entry::file("a/1")]));

        let order: Vec<_> = tree.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(order, ["a", "b", "b/2", "a/1"]);
        assert_eq!(paths(&tree.derive("")), ["a", "b"]);
    }

    #[test]
    fn test_fetch_after_close_dropped() {
        let mut tree = loaded(vec![dir("src")]);
        let Toggle::Fetch(ticket) = tree.begin_toggle("src") else {
            panic!("expected fetch");
        };
        tree.close();
        let fresh = tree.begin_load_root("repo");
        tree.complete_load_root(fresh, Ok(vec![dir("src")]));

        assert_eq!(tree.complete_fetch(ticket, Ok(vec![Entry::file("src/x")])), 0);
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_expanded("src"));
    }

    #[test]
    fn test_malformed_paths_skipped() {
        let tree = loaded(vec![Entry::file(""), Entry::file("a//b"), Entry::file("ok")]);
        assert_eq!(tree.len(), 1);
    }

    // =========================================================================
    // Derive
    // =========================================================================

    #[test]
    fn test_derive_root_in_accumulation_order() {
        let tree = loaded(vec![dir("src"), Entry::file("README.md"), dir("docs")]);
        let root = tree.derive("");
        assert_eq!(paths(&root), ["src", "README.md", "docs"]);
        assert!(root.iter().all(|n| n.children.is_empty() && !n.expanded));
    }

    #[test]
    fn test_derive_nests_expanded_children() {
        let mut tree = loaded(vec![dir("src"), Entry::file("README.md")]);
        expand(&mut tree, "src", vec![dir("src/core"), Entry::file("src/lib.rs")]);
        expand(&mut tree, "src/core", vec![Entry::file("src/core/tree.rs")]);

        let root = tree.derive("");
        assert_eq!(paths(&root), ["src", "README.md"]);
        assert_eq!(paths(&root[0].children), ["src/core", "src/lib.rs"]);
        assert_eq!(paths(&root[0].children[0].children), ["src/core/tree.rs"]);
    }

    #[test]
    fn test_derive_hides_children_of_collapsed_ancestor() {
        let mut tree = loaded(vec![dir("src")]);
        expand(&mut tree, "src", vec![dir("src/core")]);
        expand(&mut tree, "src/core", vec![Entry::file("src/core/tree.rs")]);
        tree.begin_toggle("src");

        let root = tree.derive("");
        assert!(root[0].children.is_empty());
        // The inner directory keeps its own expansion state.
        assert!(tree.is_expanded("src/core"));
    }

    #[test]
    fn test_derive_prefix_boundary() {
        let tree = loaded(vec![dir("docs"), Entry::file("docs2/readme")]);
        assert!(tree.derive("docs/").is_empty());
        assert_eq!(paths(&tree.derive("docs2/")), ["docs2/readme"]);
    }

    #[test]
    fn test_derive_direct_children_only() {
        let tree = loaded(vec![Entry::file("a/b"), Entry::file("a/b/c")]);
        assert_eq!(paths(&tree.derive("a/")), ["a/b"]);
        assert_eq!(paths(&tree.derive("a/b/")), ["a/b/c"]);
    }

    #[test]
    fn test_derive_prefix_without_separator() {
        let tree = loaded(vec![Entry::file("a/b"), Entry::file("ab")]);
        assert!(tree.derive("a").is_empty());
        assert!(tree.derive("/").is_empty());
    }

    #[test]
    fn test_derive_is_deterministic() {
        let mut tree = loaded(vec![dir("src"), Entry::file("README.md")]);
        expand(&mut tree, "src", vec![Entry::file("src/lib.rs")]);
        assert_eq!(tree.derive(""), tree.derive(""));
        assert_eq!(tree.derive("src/"), tree.derive("src/"));
    }

    #[test]
    fn test_visible_rows_preorder() {
        let mut tree = loaded(vec![dir("src"), Entry::file("README.md")]);
        expand(&mut tree, "src", vec![dir("src/core"), Entry::file("src/lib.rs")]);

        let rows: Vec<_> = tree
            .visible_rows()
            .into_iter()
            .map(|r| (r.entry.path, r.depth, r.expanded))
            .collect();
        assert_eq!(
            rows,
            [
                ("src".to_string(), 0, true),
                ("src/core".to_string(), 1, false),
                ("src/lib.rs".to_string(), 1, false),
                ("README.md".to_string(), 0, false),
            ]
        );
    }
}

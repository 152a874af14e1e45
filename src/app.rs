//! Root application module.
//!
//! Contains the main App component, AppContext definition, ViewerState,
//! and application-level setup logic following Leptos conventions.

use folio_core::{ListingProvider, Repo, Toggle, TreeMaterializer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;

use crate::components::RepoViewer;
use crate::utils::BrowserListing;

// ============================================================================
// ViewerState
// ============================================================================

/// Repository viewer state managed with Leptos signals.
///
/// The tree lives in a single signal; every mutation goes through
/// [`TreeMaterializer`] so components never hold their own copy of it.
/// Listings are fetched outside the signal and merged when they land, so
/// several directories can be loading at once.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct ViewerState {
    /// Public repositories of the owner (None until the first fetch lands).
    pub repos: RwSignal<Option<Vec<Repo>>>,
    /// Set once the repository list has been requested
    repos_requested: RwSignal<bool>,
    /// Repository whose tree is open (None = repository list).
    pub selected: RwSignal<Option<Repo>>,
    /// Content tree of the selected repository.
    pub tree: RwSignal<TreeMaterializer>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self {
            repos: RwSignal::new(None),
            repos_requested: RwSignal::new(false),
            selected: RwSignal::new(None),
            tree: RwSignal::new(TreeMaterializer::new()),
        }
    }

    /// Fetch the repository list unless it was already requested.
    ///
    /// A failed fetch leaves the list empty for the rest of the session.
    pub fn load_repos(&self) {
        if !self.claim_repo_fetch() {
            return;
        }

        let repos = self.repos;
        spawn_local(async move {
            let list = match BrowserListing::from_config().list_repos().await {
                Ok(list) => list,
                Err(err) => {
                    warn!("repository list unavailable: {err}");
                    Vec::new()
                }
            };
            repos.try_set(Some(list));
        });
    }

    /// Returns true only for the first caller.
    fn claim_repo_fetch(&self) -> bool {
        self.repos_requested
            .try_update(|requested| !std::mem::replace(requested, true))
            .unwrap_or(false)
    }

    /// Open a repository and start loading its root listing.
    pub fn open_repo(&self, repo: Repo) {
        let tree = self.tree;
        let Some(ticket) = tree.try_update(|t| t.begin_load_root(&repo.name)) else {
            return;
        };
        self.selected.set(Some(repo));

        spawn_local(async move {
            let provider = BrowserListing::from_config();
            let result = provider.list_root(ticket.container()).await;
            tree.try_update(|t| t.complete_load_root(ticket, result));
        });
    }

    /// Close the open repository, discarding its tree.
    pub fn close_repo(&self) {
        self.selected.set(None);
        self.tree.update(TreeMaterializer::close);
    }

    /// Expand or collapse a directory, fetching its children on expand.
    pub fn toggle(&self, path: &str) {
        let tree = self.tree;
        let Some(Toggle::Fetch(ticket)) = tree.try_update(|t| t.begin_toggle(path)) else {
            return;
        };

        spawn_local(async move {
            let provider = BrowserListing::from_config();
            let result = provider.list_children(ticket.source_ref()).await;
            tree.try_update(|t| t.complete_fetch(ticket, result));
        });
    }
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Repository viewer state.
    pub viewer: ViewerState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            viewer: ViewerState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the repository viewer window
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1d1d1f;
                    color: #e0e0e0;
                    font-family: -apple-system, 'Helvetica Neue', sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #a0a0a0; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #007aff;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 6px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <main class="desktop">
                <RepoViewer />
            </main>
        </ErrorBoundary>
    }
}

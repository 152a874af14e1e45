//! Repository viewer window chrome.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{RepoDetail, RepoList};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::REPO_LIST_TITLE;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Window showing the repository list, or the selected repository.
#[component]
pub fn RepoViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selected = ctx.viewer.selected;
    ctx.viewer.load_repos();

    let title = move || {
        selected.with(|repo| {
            repo.as_ref()
                .map(|r| r.name.clone())
                .unwrap_or_else(|| REPO_LIST_TITLE.to_string())
        })
    };

    view! {
        <section class=css::window aria-label="Repository viewer">
            <header class=css::titleBar>
                <span class=css::titleIcon aria-hidden="true"><Icon icon=ic::GITHUB /></span>
                <span class=css::title>{title}</span>
            </header>
            <div class=css::body>
                <Show
                    when=move || selected.with(Option::is_some)
                    fallback=|| view! { <RepoList /> }
                >
                    <RepoDetail />
                </Show>
            </div>
        </section>
    }
}

//! Repository list.
//!
//! Reads the list held by the viewer state; a failed fetch shows an empty list.

use folio_core::Repo;
use leptos::prelude::*;

use super::link::ExternalLink;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/repo_list.module.css");

#[component]
pub fn RepoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let repos = ctx.viewer.repos;

    view! {
        <div class=css::grid role="list">
            {move || {
                repos
                    .get()
                    .map(|list| {
                        list.into_iter()
                            .map(|repo| view! { <RepoCard repo=repo /> })
                            .collect_view()
                    })
            }}
        </div>
    }
}

#[component]
fn RepoCard(repo: Repo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = repo.name.clone();
    let description = repo.description.clone().unwrap_or_default();
    let language = repo.language.clone();
    let repo_url = repo.html_url.clone();
    let homepage = repo.homepage().map(String::from);
    let aria_label = format!("Open {}", repo.name);

    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.viewer.open_repo(repo.clone());
    };

    view! {
        <div class=css::card role="listitem" tabindex="0" aria-label=aria_label on:click=handle_click>
            <h3 class=css::name>{name}</h3>
            <p class=css::description>{description}</p>
            {language.map(|lang| view! { <span class=css::badge>{lang}</span> })}
            <div class=css::links>
                <ExternalLink href=repo_url label="Repository" icon=ic::GITHUB />
                {homepage.map(|url| view! {
                    <ExternalLink href=url label="Live demo" icon=ic::EXTERNAL_LINK />
                })}
            </div>
        </div>
    }
}

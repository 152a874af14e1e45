//! Selected repository: header, links and content tree.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::ContentTree;
use super::link::ExternalLink;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/repo_detail.module.css");

#[component]
pub fn RepoDetail() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let selected = ctx.viewer.selected;

    let handle_back = move |_: leptos::ev::MouseEvent| ctx.viewer.close_repo();

    view! {
        <div class=css::detail>
            <button class=css::back on:click=handle_back>
                <Icon icon=ic::CHEVRON_LEFT />
                <span>"Back to projects"</span>
            </button>
            {move || selected.get().map(|repo| {
                let homepage = repo.homepage().map(String::from);
                view! {
                    <h3 class=css::name>{repo.name}</h3>
                    <p class=css::description>{repo.description.unwrap_or_default()}</p>
                    <div class=css::links>
                        <ExternalLink href=repo.html_url label="Repository" icon=ic::GITHUB />
                        {homepage.map(|url| view! {
                            <ExternalLink href=url label="Live demo" icon=ic::LINK />
                        })}
                    </div>
                }
            })}
            <h4 class=css::sectionTitle>"Contents"</h4>
            <ContentTree />
        </div>
    }
}

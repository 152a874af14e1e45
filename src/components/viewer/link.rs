//! Outgoing link rendered only for allow-listed URLs.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::utils::validate_redirect_url;

stylance::import_crate_style!(css, "src/components/viewer/repo_list.module.css");

/// Icon-and-label link opening in a new tab.
///
/// Clicks don't bubble, so a link inside a clickable card or row only
/// navigates. Nothing is rendered when the URL fails validation.
#[component]
pub fn ExternalLink(href: String, label: &'static str, icon: IconData) -> impl IntoView {
    validate_redirect_url(&href).into_valid().map(|url| {
        view! {
            <a
                class=css::link
                href=url
                target="_blank"
                rel="noopener noreferrer"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <Icon icon=icon />
                <span>{label}</span>
            </a>
        }
    })
}

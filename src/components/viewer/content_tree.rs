//! Content tree of the selected repository.
//!
//! Renders the visible rows of the tree as a flat, indented list. Clicking
//! a directory row toggles it; clicking a name opens the entry on GitHub.

use folio_core::{TreeMaterializer, TreeRow};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TREE_INDENT_REM;
use crate::utils::validate_redirect_url;

stylance::import_crate_style!(css, "src/components/viewer/content_tree.module.css");

#[component]
pub fn ContentTree() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tree = ctx.viewer.tree;

    let rows = Signal::derive(move || tree.with(TreeMaterializer::visible_rows));

    view! {
        <div class=css::tree role="tree" aria-label="Repository contents">
            // Keyed on expansion too, so a toggled row re-renders its icons
            <For
                each=move || rows.get()
                key=|row| (row.entry.path.clone(), row.expanded)
                children=move |row| view! { <TreeRowItem row=row /> }
            />
        </div>
    }
}

#[component]
fn TreeRowItem(row: TreeRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let tree = ctx.viewer.tree;

    let is_dir = row.entry.is_dir();
    let expanded = row.expanded;
    let path = row.entry.path.clone();
    let pending_path = path.clone();
    let is_pending = Signal::derive(move || tree.with(|t| t.is_pending(&pending_path)));

    let chevron = match (is_dir, expanded) {
        (false, _) => None,
        (true, true) => Some(ic::CHEVRON_DOWN),
        (true, false) => Some(ic::CHEVRON_RIGHT),
    };
    let icon = match (is_dir, expanded) {
        (false, _) => ic::FILE,
        (true, true) => ic::FOLDER_OPEN,
        (true, false) => ic::FOLDER,
    };
    let icon_class = if is_dir {
        format!("{} {}", css::icon, css::iconDir)
    } else {
        format!("{} {}", css::icon, css::iconFile)
    };
    let indent = format!("padding-left: {}rem", row.depth as f32 * TREE_INDENT_REM);

    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            ctx.viewer.toggle(&path);
        }
    };

    let name = row.entry.name.clone();
    let label = match row.entry.external_link.as_deref().and_then(|l| validate_redirect_url(l).into_valid()) {
        Some(url) => view! {
            <a
                class=css::name
                href=url
                target="_blank"
                rel="noopener noreferrer"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                {name}
            </a>
        }
        .into_any(),
        None => view! { <span class=css::name>{name}</span> }.into_any(),
    };

    view! {
        <div
            class=css::row
            style=indent
            on:click=handle_click
            role="treeitem"
            aria-expanded=is_dir.then(|| expanded.to_string())
            aria-busy=move || is_pending.get().to_string()
        >
            <span class=css::chevron aria-hidden="true">
                {chevron.map(|icon| view! { <Icon icon=icon /> })}
            </span>
            <span class=icon_class aria-hidden="true"><Icon icon=icon /></span>
            {label}
        </div>
    }
}

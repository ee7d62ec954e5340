//! Role-aware sidebar over the static navigation trees in `nav_model`.

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::nav_model::{
    group_active, is_active, is_expanded, navigation_for, toggle_group, NavLeaf, NavNode,
};
use crate::layout::context::{is_narrow_viewport, use_layout};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let layout = use_layout();
    let location = use_location();

    // Expand state keyed by group label; activity forces groups open on top
    // of whatever is recorded here.
    let expanded = RwSignal::new(HashMap::<String, bool>::new());

    let current_path = move || location.pathname.get();

    view! {
        <nav
            class="app-sidebar"
            class:app-sidebar--collapsed=move || layout.collapsed.get()
            class:app-sidebar--mobile-open=move || layout.mobile_menu_open.get()
        >
            <div class="app-sidebar__content">
                {move || {
                    let path = current_path();
                    navigation_for(session.role_class())
                        .into_iter()
                        .map(|node| match node {
                            NavNode::Leaf(leaf) => sidebar_leaf(leaf, &path, false).into_any(),
                            NavNode::Group { label, icon: group_icon, children } => {
                                sidebar_group(label, group_icon, children, &path, expanded)
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}

fn sidebar_leaf(item: NavLeaf, path: &str, nested: bool) -> impl IntoView {
    let layout = use_layout();
    let navigate = use_navigate();
    let active = is_active(path, item.href);

    view! {
        <a
            href=item.href
            class="app-sidebar__item"
            class:app-sidebar__item--active=active
            class:app-sidebar__item--nested=nested
            on:click=move |ev| {
                ev.prevent_default();
                // Selecting a destination on a narrow viewport also closes
                // the overlay.
                if is_narrow_viewport() {
                    layout.close_mobile_menu();
                }
                navigate(item.href, Default::default());
            }
        >
            {icon(item.icon)}
            <span class="app-sidebar__label">{item.label}</span>
        </a>
    }
}

fn sidebar_group(
    label: &'static str,
    group_icon: &'static str,
    children: Vec<NavLeaf>,
    path: &str,
    expanded: RwSignal<HashMap<String, bool>>,
) -> impl IntoView {
    let active = group_active(path, &children);
    let open = expanded.with(|map| is_expanded(label, active, map));
    let path = path.to_string();

    view! {
        <div class="app-sidebar__group">
            <button
                class="app-sidebar__item app-sidebar__group-toggle"
                class:app-sidebar__item--active=active
                on:click=move |_| {
                    expanded.update(|map| toggle_group(map, label));
                }
            >
                {icon(group_icon)}
                <span class="app-sidebar__label">{label}</span>
                <span class="app-sidebar__chevron" class:app-sidebar__chevron--open=open>
                    {icon("chevron-down")}
                </span>
            </button>
            {open.then(|| view! {
                <div class="app-sidebar__children">
                    {children
                        .iter()
                        .map(|child| sidebar_leaf(*child, &path, true))
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

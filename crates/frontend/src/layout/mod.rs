pub mod context;
pub mod left;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use context::use_layout;
use left::Sidebar;

/// Authenticated application frame.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    let layout = use_layout();
    let session = use_session();
    let navigate = use_navigate();

    let user_name = move || {
        session
            .user
            .get()
            .map(|u| format!("{} {}", u.first_name, u.last_name))
            .unwrap_or_default()
    };

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu-btn"
                    on:click=move |_| layout.open_mobile_menu()
                    title="Open navigation"
                >
                    {icon("dashboard")}
                </button>
                <span class="top-header__title">"Meridian Cargo"</span>
            </div>
            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| layout.toggle_collapsed()
                    title="Toggle sidebar"
                >
                    {icon("x")}
                </button>
                <span class="top-header__user">{user_name}</span>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("user-cog")}
                </button>
            </div>
        </div>
    }
}

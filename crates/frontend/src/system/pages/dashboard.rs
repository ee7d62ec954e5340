use leptos::prelude::*;

use crate::system::auth::context::use_session;

/// Authenticated landing view for admin-like users.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let greeting = move || {
        session
            .user
            .get()
            .map(|u| format!("Welcome back, {}", u.first_name))
            .unwrap_or_else(|| "Welcome".to_string())
    };

    view! {
        <div class="page">
            <h1>"Dashboard"</h1>
            <p class="page__subtitle">{greeting}</p>
        </div>
    }
}

/// Thin routed destination for sidebar sections whose content lives outside
/// this crate's scope. Exists so active-route matching and group expansion
/// have real routes to work against.
#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page">
            <h1>{title}</h1>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Page not found"</h1>
            <p class="page__subtitle">
                "The page you are looking for does not exist. " <a href="/">"Go home"</a>
            </p>
        </div>
    }
}

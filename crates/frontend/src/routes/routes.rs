use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::domain::clients::ui::list::ClientsPage;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::dashboard::{DashboardPage, NotFoundPage, SectionPage};
use crate::system::pages::landing::LandingPage;
use crate::system::pages::login::LoginPage;
use crate::system::signup::{MarkSelectionPage, SignupPage};

/// Gate for authenticated routes: unauthenticated visitors are bounced to the
/// login page carrying the attempted path in `from`.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                let target = format!("/login?from={}", location.pathname.get());
                view! { <Redirect path=target /> }
            }
        >
            {children()}
        </Show>
    }
}

/// Root route: public marketing page for visitors, dashboard shell for
/// signed-in users.
#[component]
fn HomeGate() -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.is_authenticated() fallback=|| view! { <LandingPage /> }>
            <Shell>
                <DashboardPage />
            </Shell>
        </Show>
    }
}

/// A destination reachable from the sidebar, rendered inside the shell.
fn section(title: &'static str) -> AnyView {
    view! {
        <Protected>
            <Shell>
                <SectionPage title=title />
            </Shell>
        </Protected>
    }
    .into_any()
}

fn clients() -> AnyView {
    view! {
        <Protected>
            <Shell>
                <ClientsPage />
            </Shell>
        </Protected>
    }
    .into_any()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomeGate />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/signup/select-shipping-mark") view=MarkSelectionPage />

                // Admin side
                <Route path=path!("/clients") view=clients />
                <Route path=path!("/admin/daily-updates") view=|| section("Client Announcements") />
                <Route path=path!("/cargos/sea") view=|| section("Sea Cargo") />
                <Route path=path!("/cargos/air") view=|| section("Air Cargo") />
                <Route path=path!("/cargos/claims") view=|| section("Claims") />
                <Route path=path!("/goods/china/sea") view=|| section("China Sea Goods") />
                <Route path=path!("/goods/china/air") view=|| section("China Air Goods") />
                <Route path=path!("/goods/ghana/sea") view=|| section("Ghana Sea Warehouse") />
                <Route path=path!("/goods/ghana/air") view=|| section("Ghana Air Warehouse") />
                <Route path=path!("/rates") view=|| section("Rates") />
                <Route path=path!("/my-admins") view=|| section("Admins") />
                <Route path=path!("/notes") view=|| section("Notes") />
                <Route path=path!("/settings") view=|| section("Settings") />

                // Customer side
                <Route path=path!("/customer/cargo/sea") view=|| section("My Goods") />
                <Route path=path!("/daily-updates/sea-goods") view=|| section("Daily Updates") />
                <Route path=path!("/shipments/sea-containers") view=|| section("Shipments") />
                <Route path=path!("/my-claims") view=|| section("My Claims") />
                <Route path=path!("/my-notes") view=|| section("My Notes") />
                <Route path=path!("/my-addresses") view=|| section("Addresses") />
                <Route path=path!("/my-profile") view=|| section("Profile") />
            </Routes>
        </Router>
    }
}

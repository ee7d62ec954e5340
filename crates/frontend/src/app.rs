use leptos::prelude::*;

use crate::layout::context::LayoutContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{NoticeHost, Notifier};
use crate::system::auth::context::SessionContext;

#[component]
pub fn App() -> impl IntoView {
    // Process-wide session holder; mutated only by login/signup success paths.
    let session = SessionContext::new();
    session.restore();
    provide_context(session);

    // Sidebar collapse / mobile overlay state.
    provide_context(LayoutContext::new());

    // Notification queue rendered by NoticeHost.
    provide_context(Notifier::new());

    view! {
        <NoticeHost />
        <AppRoutes />
    }
}

//! Notification queue for transient user-facing notices.
//!
//! Usage:
//! ```ignore
//! let notifier = use_context::<Notifier>().expect("Notifier not provided");
//! notifier.success("Client Created", "New client has been added.");
//! ```

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen before auto-dismissal, in milliseconds.
const NOTICE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

/// Centralized notification service, provided via context in `App`.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notify(&self, level: NoticeLevel, title: &str, body: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.notices.update(|items| {
            items.push(Notice {
                id,
                level,
                title: title.to_string(),
                body: body.to_string(),
            })
        });

        let notices = self.notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            notices.update(|items| items.retain(|n| n.id != id));
        });
    }

    pub fn info(&self, title: &str, body: &str) {
        self.notify(NoticeLevel::Info, title, body);
    }

    pub fn success(&self, title: &str, body: &str) {
        self.notify(NoticeLevel::Success, title, body);
    }

    pub fn warning(&self, title: &str, body: &str) {
        self.notify(NoticeLevel::Warning, title, body);
    }

    pub fn error(&self, title: &str, body: &str) {
        self.notify(NoticeLevel::Error, title, body);
    }

    pub fn dismiss(&self, id: u32) {
        self.notices.update(|items| items.retain(|n| n.id != id));
    }

    fn all(&self) -> Vec<Notice> {
        self.notices.get()
    }
}

/// Renders the notice queue in a fixed overlay. Mounted once in `App`.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notifier = use_context::<Notifier>().expect("Notifier not provided in context");

    view! {
        <div class="notice-host">
            {move || {
                notifier
                    .all()
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=notice.level.css_class()>
                                <div class="notice__title">{notice.title}</div>
                                <div class="notice__body">{notice.body}</div>
                                <button
                                    class="notice__close"
                                    on:click=move |_| notifier.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

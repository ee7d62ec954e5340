use contracts::domain::signup::{GenerateMarksRequest, SignupDraft, SignupWithMarkRequest};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use thaw::Spinner;

use super::flow::{entry_guard, submit_outcome, MarkSelection, SubmitOutcome};
use crate::shared::notify::Notifier;
use crate::system::auth::{api, context::use_session};

/// Route the customer lands on after signup completes. A full page load (not
/// a soft route change) guarantees the session context is rebuilt from
/// storage.
const POST_SIGNUP_ROUTE: &str = "/customer/cargo/sea";
const POST_SIGNUP_REDIRECT_DELAY_MS: u32 = 500;

/// Second signup screen: negotiates a unique shipping mark with the backend
/// and submits the full draft together with the chosen mark.
#[component]
pub fn MarkSelectionPage() -> impl IntoView {
    let session = use_session();
    let notifier = use_context::<Notifier>().expect("Notifier not provided in context");

    // Without a draft the suggestion endpoint is never called.
    let draft = match entry_guard(session.signup_draft.get_untracked()) {
        Ok(draft) => draft,
        Err(route) => {
            notifier.error("Error", "Please complete the signup form first");
            return view! { <Redirect path=route.to_string() /> }.into_any();
        }
    };

    let selection = RwSignal::new(MarkSelection::default());
    let is_refreshing = RwSignal::new(false);
    let is_submitting = RwSignal::new(false);

    let draft_stored = StoredValue::new(draft.clone());
    let first_name = draft.first_name.clone();

    let refresh = move || {
        let draft = draft_stored.get_value();
        spawn_local(run_generation(draft, selection, is_refreshing, notifier));
    };

    // Initial suggestion set, requested on entry.
    refresh();

    let on_submit = move |_| {
        let current = selection.get_untracked();
        if current.selection_required() {
            notifier.error(
                "Selection Required",
                "Please select a shipping mark to continue",
            );
            return;
        }
        let Some(mark) = current.selected else {
            return;
        };

        let draft = draft_stored.get_value();
        is_submitting.set(true);

        spawn_local(async move {
            let request = SignupWithMarkRequest::new(draft.clone(), mark.clone());
            let result = api::signup_with_shipping_mark(&request).await;
            is_submitting.set(false);

            match result {
                Ok(response) => match submit_outcome(response) {
                    SubmitOutcome::Completed(data) => {
                        let first_name = data.user.first_name.clone();
                        session.install(data.user, &data.tokens);
                        notifier.success(
                            "Account Created Successfully!",
                            &format!(
                                "Welcome {}! Your shipping mark is: {}",
                                first_name, mark
                            ),
                        );
                        // Short pause so the notice is visible, then a full
                        // navigation to reinitialize the authenticated app.
                        TimeoutFuture::new(POST_SIGNUP_REDIRECT_DELAY_MS).await;
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(POST_SIGNUP_ROUTE);
                        }
                    }
                    SubmitOutcome::RegenerateSuggestions => {
                        notifier.error(
                            "Shipping Mark Taken",
                            "This shipping mark was just taken. Generating new options...",
                        );
                        run_generation(draft, selection, is_refreshing, notifier).await;
                    }
                    SubmitOutcome::Failed(message) => {
                        notifier.error("Signup Failed", &message);
                    }
                },
                Err(e) => {
                    log::error!("signup request failed: {}", e);
                    notifier.error(
                        "Signup Failed",
                        "An unexpected error occurred. Please try again.",
                    );
                }
            }
        });
    };

    let submit_disabled = move || {
        is_submitting.get()
            || is_refreshing.get()
            || selection.with(|s| s.selection_required())
    };

    view! {
        <div class="auth-page">
            <div class="auth-box">
                <h2>"Select your shipping mark"</h2>
                <p class="auth-subtitle">"Pick a unique shipping mark for your account"</p>

                <div class="mark-toolbar">
                    <p>"Choose one of the options below. You can refresh to see new suggestions."</p>
                    <button
                        type="button"
                        class="btn-ghost"
                        title="Generate new suggestions"
                        disabled=move || is_refreshing.get()
                        on:click=move |_| refresh()
                    >
                        "Refresh"
                    </button>
                </div>

                <div class="mark-hint">
                    <strong>{format!("Hello {}!", first_name)}</strong>
                    " We've generated a set of shipping marks based on your name."
                </div>

                {move || {
                    if is_refreshing.get() {
                        view! {
                            <div class="mark-loading">
                                <Spinner />
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="mark-options">
                                {selection
                                    .get()
                                    .suggestions
                                    .into_iter()
                                    .map(|mark| {
                                        let value = mark.clone();
                                        let checked = selection
                                            .with(|s| s.selected.as_deref() == Some(mark.as_str()));
                                        view! {
                                            <label
                                                class="mark-option"
                                                class:mark-option--selected=checked
                                            >
                                                <input
                                                    type="radio"
                                                    name="shipping_mark"
                                                    value=value.clone()
                                                    prop:checked=checked
                                                    on:change=move |_| {
                                                        selection.update(|s| s.select(&value))
                                                    }
                                                />
                                                <span class="mark-option__mark">{mark}</span>
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}

                <button
                    type="button"
                    class="btn-primary"
                    disabled=submit_disabled
                    on:click=on_submit
                >
                    {move || if is_submitting.get() { "Creating Account..." } else { "Complete Signup" }}
                </button>

                <p class="auth-footnote">
                    "Not happy with these options? "
                    <button
                        type="button"
                        class="btn-link"
                        disabled=move || is_refreshing.get()
                        on:click=move |_| refresh()
                    >
                        "Generate new ones"
                    </button>
                </p>
            </div>
        </div>
    }
    .into_any()
}

/// Request a fresh candidate set and fold it into the selection state.
///
/// Concurrent refreshes are not fenced; the last response to arrive wins.
async fn run_generation(
    draft: SignupDraft,
    selection: RwSignal<MarkSelection>,
    is_refreshing: RwSignal<bool>,
    notifier: Notifier,
) {
    is_refreshing.set(true);
    let request = GenerateMarksRequest::from_draft(&draft);
    let result = api::generate_shipping_marks(&request).await;
    is_refreshing.set(false);

    let mut state = selection.get_untracked();
    match state.apply_generation(result) {
        Ok(()) => selection.set(state),
        Err(message) => notifier.error("Error", &message),
    }
}

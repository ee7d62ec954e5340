use contracts::domain::clients::{Region, UserType};
use contracts::domain::signup::{validate_draft, FieldError, SignupDraft};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_session;

/// First signup screen: collects the draft and hands it to the shipping-mark
/// selection screen. No network call happens here.
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let draft = RwSignal::new(SignupDraft::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let error_for = move |field: &'static str| {
        errors.with(|errs| {
            errs.iter()
                .find(|e| e.field == field)
                .map(|e| e.message.clone())
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = draft.get();
        match validate_draft(&current) {
            Ok(()) => {
                errors.set(Vec::new());
                // Hand the unsubmitted draft to the selection screen.
                session.signup_draft.set(Some(current));
                navigate("/signup/select-shipping-mark", Default::default());
            }
            Err(errs) => errors.set(errs),
        }
    };

    let field_error = move |field: &'static str| {
        error_for(field).map(|msg| view! { <p class="field-error">{msg}</p> })
    };

    view! {
        <div class="auth-page">
            <div class="auth-box">
                <h1>"Meridian Cargo"</h1>
                <h2>"Create an account"</h2>
                <p class="auth-subtitle">"Simple signup to manage your shipments"</p>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="first_name">"First name"</label>
                        <input
                            type="text"
                            id="first_name"
                            placeholder="John"
                            prop:value=move || draft.get().first_name
                            on:input=move |ev| {
                                draft.update(|d| d.first_name = event_target_value(&ev))
                            }
                        />
                        {move || field_error("first_name")}
                    </div>

                    <div class="form-group">
                        <label for="last_name">"Last name"</label>
                        <input
                            type="text"
                            id="last_name"
                            placeholder="Mensah"
                            prop:value=move || draft.get().last_name
                            on:input=move |ev| {
                                draft.update(|d| d.last_name = event_target_value(&ev))
                            }
                        />
                        {move || field_error("last_name")}
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="john@example.com"
                            prop:value=move || draft.get().email
                            on:input=move |ev| {
                                draft.update(|d| d.email = event_target_value(&ev))
                            }
                        />
                        {move || field_error("email")}
                    </div>

                    <div class="form-group">
                        <label for="phone">"Phone"</label>
                        <input
                            type="tel"
                            id="phone"
                            placeholder="+233 501 234567"
                            prop:value=move || draft.get().phone
                            on:input=move |ev| {
                                draft.update(|d| d.phone = event_target_value(&ev))
                            }
                        />
                        {move || field_error("phone")}
                    </div>

                    <div class="form-group">
                        <label for="region">"Region"</label>
                        <select
                            id="region"
                            on:change=move |ev| {
                                draft.update(|d| {
                                    d.region = Region::from_str_opt(&event_target_value(&ev))
                                })
                            }
                        >
                            <option value="" selected=move || draft.get().region.is_none()>
                                "Select your region"
                            </option>
                            {Region::ALL
                                .iter()
                                .map(|region| {
                                    let region = *region;
                                    view! {
                                        <option
                                            value=region.as_str()
                                            selected=move || draft.get().region == Some(region)
                                        >
                                            {region.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        {move || field_error("region")}
                    </div>

                    <div class="form-group">
                        <label for="user_type">"Account type"</label>
                        <select
                            id="user_type"
                            on:change=move |ev| {
                                draft.update(|d| {
                                    d.user_type = if event_target_value(&ev) == "BUSINESS" {
                                        UserType::Business
                                    } else {
                                        UserType::Individual
                                    }
                                })
                            }
                        >
                            <option value="INDIVIDUAL">"Individual"</option>
                            <option value="BUSINESS">"Business"</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || draft.get().password
                            on:input=move |ev| {
                                draft.update(|d| d.password = event_target_value(&ev))
                            }
                        />
                        {move || field_error("password")}
                    </div>

                    <div class="form-group">
                        <label for="confirm_password">"Confirm password"</label>
                        <input
                            type="password"
                            id="confirm_password"
                            prop:value=move || draft.get().confirm_password
                            on:input=move |ev| {
                                draft.update(|d| d.confirm_password = event_target_value(&ev))
                            }
                        />
                        {move || field_error("confirm_password")}
                    </div>

                    <button type="submit" class="btn-primary">
                        "Create account"
                    </button>

                    <p class="auth-footnote">
                        "Already have an account? " <a href="/login">"Sign in"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}

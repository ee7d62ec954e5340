use contracts::system::auth::RoleClass;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::system::auth::{api, context::use_session};

/// Pick the landing route after login: an explicit `from` target wins,
/// otherwise admin-like users land on the dashboard and customers on their
/// cargo view.
fn redirect_target(from: Option<&str>, class: RoleClass) -> &str {
    match from {
        Some(from) if from != "/" && from != "/login" => from,
        _ => match class {
            RoleClass::AdminLike => "/",
            RoleClass::Customer => "/customer/cargo/sea",
        },
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let query = use_query_map();

    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let phone_val = phone.get();
        let password_val = password.get();
        let from = query.with_untracked(|q| q.get("from"));
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(phone_val, password_val).await {
                Ok(response) => {
                    let class = response.user.role_class();
                    session.install(response.user, &response.tokens);
                    set_is_loading.set(false);
                    navigate(
                        redirect_target(from.as_deref(), class),
                        Default::default(),
                    );
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Login failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-box">
                <h1>"Meridian Cargo"</h1>
                <h2>"Sign in to your account"</h2>
                <p class="auth-subtitle">"Manage shipments, containers and claims"</p>

                {move || {
                    error_message
                        .get()
                        .map(|msg| view! { <div class="error-message">{msg}</div> })
                }}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="phone">"Phone"</label>
                        <input
                            type="tel"
                            id="phone"
                            placeholder="e.g. +233501234567"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>

                    <div class="auth-links">
                        <a href="/forgot-password">"Forgot password?"</a>
                        <a href="/signup">"Sign up"</a>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_from_target_wins() {
        assert_eq!(
            redirect_target(Some("/rates"), RoleClass::Customer),
            "/rates"
        );
    }

    #[test]
    fn login_and_root_targets_fall_back_to_role_default() {
        assert_eq!(redirect_target(Some("/login"), RoleClass::AdminLike), "/");
        assert_eq!(
            redirect_target(Some("/"), RoleClass::Customer),
            "/customer/cargo/sea"
        );
        assert_eq!(redirect_target(None, RoleClass::AdminLike), "/");
        assert_eq!(
            redirect_target(None, RoleClass::Customer),
            "/customer/cargo/sea"
        );
    }
}

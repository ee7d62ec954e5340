use std::rc::Rc;

use contracts::domain::clients::{Region, UserType};
use contracts::system::auth::UserRole;
use leptos::prelude::*;

use super::view_model::{FormVariant, NewClientViewModel};
use crate::shared::modal::Modal;
use crate::shared::notify::Notifier;
use crate::system::auth::context::use_session;

/// Dialog for creating a client account. The field set is fixed when the
/// dialog opens: admin-like operators get the reduced form, everyone else the
/// full one.
#[component]
pub fn NewClientDialog(
    open: RwSignal<bool>,
    on_created: Callback<Option<serde_json::Value>>,
) -> impl IntoView {
    let session = use_session();
    let notifier = use_context::<Notifier>().expect("Notifier not provided in context");

    view! {
        {move || {
            open.get()
                .then(|| {
                    let vm = NewClientViewModel::new(session.role_class());
                    let on_close = Callback::new(move |_| open.set(false));
                    view! {
                        <Modal title="New Client".to_string() on_close=on_close>
                            <NewClientForm vm=vm notifier=notifier open=open on_created=on_created />
                        </Modal>
                    }
                })
        }}
    }
}

#[component]
fn NewClientForm(
    vm: NewClientViewModel,
    notifier: Notifier,
    open: RwSignal<bool>,
    on_created: Callback<Option<serde_json::Value>>,
) -> impl IntoView {
    let is_full = vm.variant == FormVariant::Full;

    let on_submit = move |_| {
        vm.submit(
            notifier,
            Rc::new(move |record| on_created.run(record)),
            Rc::new(move || open.set(false)),
        );
    };

    view! {
        <div class="detail-form">
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label" for="first_name">{"First Name"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="first_name"
                        prop:value=move || vm.form.get().first_name
                        on:input=move |ev| {
                            vm.form.update(|f| f.first_name = event_target_value(&ev));
                        }
                        placeholder="Enter first name"
                        required
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="last_name">{"Last Name"}</label>
                    <input
                        class="form__input"
                        type="text"
                        id="last_name"
                        prop:value=move || vm.form.get().last_name
                        on:input=move |ev| {
                            vm.form.update(|f| f.last_name = event_target_value(&ev));
                        }
                        placeholder="Enter last name"
                        required
                    />
                </div>
            </div>

            <div class="form__group">
                <label class="form__label" for="shipping_mark">{"Shipping Mark"}</label>
                <input
                    class="form__input"
                    type="text"
                    id="shipping_mark"
                    prop:value=move || vm.form.get().shipping_mark
                    on:input=move |ev| {
                        vm.form.update(|f| f.shipping_mark = event_target_value(&ev));
                    }
                    placeholder="e.g. PM 001 KOFI"
                    required
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="phone">{"Phone"}</label>
                <input
                    class="form__input"
                    type="tel"
                    id="phone"
                    prop:value=move || vm.form.get().phone
                    on:input=move |ev| {
                        vm.form.update(|f| f.phone = event_target_value(&ev));
                    }
                    placeholder="Enter phone number"
                    required
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="email">{"Email (optional)"}</label>
                <input
                    class="form__input"
                    type="email"
                    id="email"
                    prop:value=move || vm.form.get().email
                    on:input=move |ev| {
                        vm.form.update(|f| f.email = event_target_value(&ev));
                    }
                    placeholder="Enter email address"
                />
            </div>

            {is_full
                .then(|| {
                    view! {
                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="nickname">{"Nickname"}</label>
                                <input
                                    class="form__input"
                                    type="text"
                                    id="nickname"
                                    prop:value=move || vm.form.get().nickname
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.nickname = event_target_value(&ev));
                                    }
                                    placeholder="Enter nickname"
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="company_name">{"Company"}</label>
                                <input
                                    class="form__input"
                                    type="text"
                                    id="company_name"
                                    prop:value=move || vm.form.get().company_name
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.company_name = event_target_value(&ev));
                                    }
                                    placeholder="Enter company name"
                                />
                            </div>
                        </div>

                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="region">{"Region"}</label>
                                <select
                                    class="form__input"
                                    id="region"
                                    on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        vm.form.update(|f| f.region = Region::from_str_opt(&value));
                                    }
                                >
                                    <option value="" selected=move || vm.form.get().region.is_none()>
                                        {"Select region"}
                                    </option>
                                    {Region::ALL
                                        .iter()
                                        .map(|region| {
                                            let region = *region;
                                            view! {
                                                <option
                                                    value=region.as_str()
                                                    selected=move || vm.form.get().region == Some(region)
                                                >
                                                    {region.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="user_type">{"Client Type"}</label>
                                <select
                                    class="form__input"
                                    id="user_type"
                                    on:change=move |ev| {
                                        let business = event_target_value(&ev) == UserType::Business.as_str();
                                        vm.form
                                            .update(|f| {
                                                f.user_type = if business {
                                                    UserType::Business
                                                } else {
                                                    UserType::Individual
                                                };
                                            });
                                    }
                                >
                                    {[UserType::Individual, UserType::Business]
                                        .iter()
                                        .map(|user_type| {
                                            let user_type = *user_type;
                                            view! {
                                                <option
                                                    value=user_type.as_str()
                                                    selected=move || vm.form.get().user_type == user_type
                                                >
                                                    {user_type.label()}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="user_role">{"Role"}</label>
                            <select
                                class="form__input"
                                id="user_role"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    if let Some(role) = UserRole::ALL
                                        .iter()
                                        .copied()
                                        .find(|role| role.as_str() == value)
                                    {
                                        vm.form.update(|f| f.user_role = role);
                                    }
                                }
                            >
                                {UserRole::ALL
                                    .iter()
                                    .map(|role| {
                                        let role = *role;
                                        view! {
                                            <option
                                                value=role.as_str()
                                                selected=move || vm.form.get().user_role == role
                                            >
                                                {role.label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form-group checkbox-group">
                            <label class="form__checkbox-wrapper">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.form.get().is_active
                                    on:change=move |ev| {
                                        vm.form.update(|f| f.is_active = event_target_checked(&ev));
                                    }
                                />
                                <span class="form__checkbox-label">{"Active"}</span>
                            </label>
                            <label class="form__checkbox-wrapper">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.form.get().is_verified
                                    on:change=move |ev| {
                                        vm.form.update(|f| f.is_verified = event_target_checked(&ev));
                                    }
                                />
                                <span class="form__checkbox-label">{"Verified"}</span>
                            </label>
                        </div>

                        <div class="form__row">
                            <div class="form__group">
                                <label class="form__label" for="password">{"Password"}</label>
                                <input
                                    class="form__input"
                                    type="password"
                                    id="password"
                                    prop:value=move || vm.form.get().password
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.password = event_target_value(&ev));
                                    }
                                    placeholder="Enter password"
                                    required
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label" for="confirm_password">{"Confirm Password"}</label>
                                <input
                                    class="form__input"
                                    type="password"
                                    id="confirm_password"
                                    prop:value=move || vm.form.get().confirm_password
                                    on:input=move |ev| {
                                        vm.form.update(|f| f.confirm_password = event_target_value(&ev));
                                    }
                                    placeholder="Repeat password"
                                    required
                                />
                            </div>
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="notes">{"Notes"}</label>
                            <textarea
                                class="form__textarea"
                                id="notes"
                                prop:value=move || vm.form.get().notes
                                on:input=move |ev| {
                                    vm.form.update(|f| f.notes = event_target_value(&ev));
                                }
                                placeholder="Internal notes about this client"
                                rows="3"
                            />
                        </div>
                    }
                        .into_any()
                })}

            {(!is_full)
                .then(|| {
                    view! {
                        <small class="help-text">
                            {"The account is created verified, with the standard starter password."}
                        </small>
                    }
                })}

            <div class="modal-actions">
                <button class="button button--secondary" on:click=move |_| open.set(false)>
                    {"Cancel"}
                </button>
                <button
                    class="button button--primary"
                    on:click=on_submit
                    disabled=move || vm.submitting.get()
                >
                    {move || if vm.submitting.get() { "Creating..." } else { "Create Client" }}
                </button>
            </div>
        </div>
    }
}

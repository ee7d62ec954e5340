use contracts::domain::clients::ClientSummary;
use leptos::prelude::*;

use crate::domain::clients::ui::new_client::NewClientDialog;
use crate::shared::icons::icon;
use crate::system::auth::api;

/// Admin clients page: the directory table plus the New Client dialog.
#[component]
pub fn ClientsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<ClientSummary>::new());
    let error = RwSignal::new(None::<String>);
    let dialog_open = RwSignal::new(false);

    let fetch = move || {
        leptos::task::spawn_local(async move {
            match api::fetch_clients().await {
                Ok(clients) => {
                    items.set(clients);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let on_created = Callback::new(move |_record: Option<serde_json::Value>| {
        // The create response envelope is not trusted as a row source; the
        // list is re-read from the server instead.
        fetch();
    });

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Clients"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| dialog_open.set(true)>
                        {icon("users")}
                        {"New Client"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="warning-box text-error">
                                {icon("alert-triangle")}
                                <span class="warning-box__text">{e}</span>
                            </div>
                        }
                    })
            }}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Shipping Mark"}</th>
                            <th class="table__header-cell">{"Phone"}</th>
                            <th class="table__header-cell">{"Email"}</th>
                            <th class="table__header-cell">{"Verified"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                {format!("{} {}", row.first_name, row.last_name)}
                                            </td>
                                            <td class="table__cell">
                                                {row.shipping_mark.unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell">{row.phone}</td>
                                            <td class="table__cell">
                                                {row.email.unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell">
                                                {if row.is_verified { "Yes" } else { "No" }}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <NewClientDialog open=dialog_open on_created=on_created />
        </div>
    }
}

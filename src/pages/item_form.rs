//! Item create/edit form. Serves both `/items/new` and `/items/:id/edit`;
//! the presence of an `id` route param selects edit mode.

#[cfg(test)]
#[path = "item_form_test.rs"]
mod item_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::net::items;
use crate::net::types::{Category, ItemPayload, ItemStatus};
use crate::state::session::SessionState;
use crate::util::guard;

/// Shape and validate the form values into the wire payload.
fn build_payload(
    title: &str,
    category_id: &str,
    description: &str,
    status: &str,
) -> Result<ItemPayload, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required.");
    }
    let description = description.trim();
    Ok(ItemPayload {
        title: title.to_owned(),
        category_id: category_id.parse::<i64>().ok(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        current_status: ItemStatus::parse(status).map(|s| s.as_str().to_owned()),
    })
}

#[component]
pub fn ItemFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install(session, None, navigate.clone());
    let params = use_params_map();

    let title = RwSignal::new(String::new());
    let category_id = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(ItemStatus::Lost.as_str().to_owned());
    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let editing_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    // One-time loads once the guard admits us: category lookup, and the
    // existing item when editing.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !guard::can_render(&session.get(), None) {
            return;
        }
        requested.set(true);
        let edit_target = editing_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(list) = items::categories().await {
                categories.set(list);
            }
            if let Some(id) = edit_target {
                match items::get(id).await {
                    Ok(item) => {
                        title.set(item.title);
                        category_id
                            .set(item.category_id.map(|id| id.to_string()).unwrap_or_default());
                        description.set(item.description.unwrap_or_default());
                        if let Some(current) = item.current_status {
                            status.set(current);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = edit_target;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_payload(
            &title.get(),
            &category_id.get(),
            &description.get(),
            &status.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let edit_target = editing_id();
            leptos::task::spawn_local(async move {
                let saved = match edit_target {
                    Some(id) => items::update(id, &payload).await,
                    None => items::create(&payload).await,
                };
                match saved {
                    Ok(item) => navigate(
                        &format!("/items/{}", item.item_id),
                        NavigateOptions::default(),
                    ),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, payload);
            busy.set(false);
        }
    };

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="form-page">
                <h1>
                    {move || if editing_id().is_some() { "Edit Item" } else { "Register Item" }}
                </h1>
                <form class="entity-form" on:submit=on_submit.clone()>
                    <label class="entity-form__field">
                        <span>"Title"</span>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="entity-form__field">
                        <span>"Category"</span>
                        <select
                            prop:value=move || category_id.get()
                            on:change=move |ev| category_id.set(event_target_value(&ev))
                        >
                            <option value="">"No category"</option>
                            {move || {
                                categories
                                    .get()
                                    .into_iter()
                                    .map(|c| {
                                        view! {
                                            <option value=c.category_id.to_string()>
                                                {c.category_name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="entity-form__field">
                        <span>"Description"</span>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="entity-form__field">
                        <span>"Status"</span>
                        <select
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            {ItemStatus::ALL
                                .into_iter()
                                .map(|s| {
                                    view! { <option value=s.as_str()>{s.label()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button" type="submit" disabled=move || busy.get()>
                        {move || if editing_id().is_some() { "Save Changes" } else { "Register" }}
                    </button>
                </form>
            </div>
        </Show>
    }
}

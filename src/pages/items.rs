//! Item list page with search and filters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The main browse surface. Filters are pushed to the server as query
//! params; the free-text search is debounced so a fetch goes out only
//! once typing pauses.

#[cfg(test)]
#[path = "items_page_test.rs"]
mod items_page_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::components::status_badge::ItemBadge;
use crate::net::items::{self, ItemQuery};
use crate::net::types::{Category, Item, ItemStatus};
use crate::state::session::SessionState;
use crate::util::guard;

/// Shape the raw filter widget values into the server query. Empty
/// selections mean "no filter"; an unknown status string is treated as
/// unfiltered rather than sent upstream.
fn build_query(status: &str, category_id: &str, search: &str) -> ItemQuery {
    ItemQuery {
        status: ItemStatus::parse(status),
        category_id: category_id.parse::<i64>().ok(),
        search: {
            let trimmed = search.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        },
    }
}

#[component]
pub fn ItemsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());

    let items_list = RwSignal::new(Vec::<Item>::new());
    let list_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let categories = RwSignal::new(Vec::<Category>::new());

    let status_filter = RwSignal::new(String::new());
    let category_filter = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    // Bumped after a debounce window closes; the list effect tracks it.
    let search_tick = RwSignal::new(0u32);

    // Category lookup, once the guard admits us.
    let categories_requested = RwSignal::new(false);
    Effect::new(move || {
        if categories_requested.get() {
            return;
        }
        if !guard::can_render(&session.get(), None) {
            return;
        }
        categories_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(list) = items::categories().await {
                categories.set(list);
            }
        });
    });

    // Item list; refetches on filter changes and settled searches.
    Effect::new(move || {
        search_tick.get();
        let status = status_filter.get();
        let category = category_filter.get();
        if !guard::can_render(&session.get(), None) {
            return;
        }
        let query = build_query(&status, &category, &search.get_untracked());
        list_loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match items::list(&query).await {
                Ok(list) => {
                    items_list.set(list);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            list_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            list_loading.set(false);
        }
    });

    let on_search_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search.set(value.clone());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(300)).await;
            if search.get_untracked() == value {
                search_tick.update(|n| *n += 1);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    };

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="items-page">
                <div class="items-page__toolbar">
                    <h1>"Items"</h1>
                    <a class="items-page__new" href="/items/new">"Register Item"</a>
                </div>
                <div class="items-page__filters">
                    <input
                        class="items-page__search"
                        type="search"
                        placeholder="Search items…"
                        prop:value=move || search.get()
                        on:input=on_search_input
                    />
                    <select
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All statuses"</option>
                        {ItemStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.as_str()>{status.label()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <select
                        prop:value=move || category_filter.get()
                        on:change=move |ev| category_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All categories"</option>
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
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !list_loading.get() fallback=|| view! { <Loading/> }>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Category"</th>
                                <th>"Status"</th>
                                <th>"Registered by"</th>
                                <th>"On"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items_list
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        let href = format!("/items/{}", item.item_id);
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=href>{item.title.clone()}</a>
                                                </td>
                                                <td>
                                                    {item.category_name.clone().unwrap_or_default()}
                                                </td>
                                                <td>
                                                    <ItemBadge status=item.current_status.clone()/>
                                                </td>
                                                <td>
                                                    {item.creator_name.clone().unwrap_or_default()}
                                                </td>
                                                <td>{item.created_on.clone().unwrap_or_default()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || items_list.get().is_empty()>
                        <p class="empty-note">"No items match the current filters."</p>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

//! Item detail page: fields, photos, and the claim entry point.

#[cfg(test)]
#[path = "item_detail_test.rs"]
mod item_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::components::status_badge::ItemBadge;
use crate::net::http;
use crate::net::items;
use crate::net::types::Item;
use crate::state::session::SessionState;
use crate::util::guard;

/// Owner-or-admin check used for the edit/delete/upload affordances.
/// The server enforces the same rule; this only decides what to render.
fn can_modify(state: &SessionState, item: &Item) -> bool {
    state.is_admin() || (state.user_id().is_some() && state.user_id() == item.created_by)
}

#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());
    let params = use_params_map();

    let item = RwSignal::new(None::<Item>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    // Bumped to refetch after an image upload lands.
    let refresh = RwSignal::new(0u32);

    let item_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    Effect::new(move || {
        refresh.get();
        let Some(id) = item_id() else {
            return;
        };
        if !guard::can_render(&session.get(), None) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match items::get(id).await {
                Ok(loaded) => item.set(Some(loaded)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_delete = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let Some(id) = item_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this item?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                match items::remove(id).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/items");
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_file_change = Callback::new(move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(id) = item_id() else {
                return;
            };
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                match items::upload_image(id, &file).await {
                    Ok(_) => refresh.update(|n| *n += 1),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    });

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="item-detail-page">
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    item.get()
                        .map(|loaded| {
                            let editable = can_modify(&session.get(), &loaded);
                            let claim_href = format!("/claims/new?item={}", loaded.item_id);
                            let edit_href = format!("/items/{}/edit", loaded.item_id);
                            view! {
                                <div class="item-detail">
                                    <div class="item-detail__heading">
                                        <h1>{loaded.title.clone()}</h1>
                                        <ItemBadge status=loaded.current_status.clone()/>
                                    </div>
                                    <dl class="item-detail__fields">
                                        <dt>"Category"</dt>
                                        <dd>{loaded.category_name.clone().unwrap_or_default()}</dd>
                                        <dt>"Description"</dt>
                                        <dd>{loaded.description.clone().unwrap_or_default()}</dd>
                                        <dt>"Registered by"</dt>
                                        <dd>{loaded.creator_name.clone().unwrap_or_default()}</dd>
                                        <dt>"Registered on"</dt>
                                        <dd>{loaded.created_on.clone().unwrap_or_default()}</dd>
                                    </dl>
                                    <div class="item-detail__images">
                                        {loaded
                                            .images
                                            .iter()
                                            .map(|image| {
                                                let src = http::api_url(&image.file_path);
                                                view! {
                                                    <img class="item-detail__image" src=src/>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="item-detail__actions">
                                        <a class="button" href=claim_href>"Claim This Item"</a>
                                        <Show when=move || editable>
                                            <a class="button" href=edit_href.clone()>"Edit"</a>
                                            <label class="button button--upload">
                                                "Add Photo"
                                                <input
                                                    type="file"
                                                    accept="image/*"
                                                    on:change=move |ev| on_file_change.run(ev)
                                                    disabled=move || busy.get()
                                                />
                                            </label>
                                            <button
                                                class="button button--danger"
                                                on:click=move |_| on_delete.run(())
                                                disabled=move || busy.get()
                                            >
                                                "Delete"
                                            </button>
                                        </Show>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}

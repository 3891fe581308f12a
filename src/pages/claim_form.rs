//! Claim submission form, usually reached from an item detail page via
//! `/claims/new?item=<id>`.

#[cfg(test)]
#[path = "claim_form_test.rs"]
mod claim_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading::Loading;
use crate::net::{claims, items};
use crate::net::types::{ClaimPayload, Item};
use crate::state::session::SessionState;
use crate::util::guard;

fn parse_item_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
}

fn build_claim_payload(item_id: Option<i64>, claim_text: &str) -> Result<ClaimPayload, &'static str> {
    let Some(item_id) = item_id else {
        return Err("No item selected. Open the item and use \"Claim This Item\".");
    };
    let claim_text = claim_text.trim();
    Ok(ClaimPayload {
        item_id,
        claim_text: (!claim_text.is_empty()).then(|| claim_text.to_owned()),
    })
}

#[component]
pub fn ClaimFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install(session, None, navigate.clone());
    let query = use_query_map();

    let item = RwSignal::new(None::<Item>);
    let claim_text = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let item_id = move || parse_item_param(query.get().get("item").as_deref());

    // Fetch the item being claimed so the form can show what it is.
    Effect::new(move || {
        let Some(id) = item_id() else {
            return;
        };
        if !guard::can_render(&session.get(), None) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(loaded) = items::get(id).await {
                item.set(Some(loaded));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_claim_payload(item_id(), &claim_text.get()) {
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
            leptos::task::spawn_local(async move {
                match claims::create(&payload).await {
                    Ok(claim) => navigate(
                        &format!("/claims/{}", claim.claim_id),
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
                <h1>"Claim an Item"</h1>
                {move || {
                    item.get()
                        .map(|loaded| {
                            view! {
                                <p class="claim-form__item">
                                    "Claiming: " <strong>{loaded.title.clone()}</strong>
                                </p>
                            }
                        })
                }}
                <form class="entity-form" on:submit=on_submit.clone()>
                    <label class="entity-form__field">
                        <span>"Why is this item yours?"</span>
                        <textarea
                            placeholder="Describe identifying details only the owner would know"
                            prop:value=move || claim_text.get()
                            on:input=move |ev| claim_text.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button" type="submit" disabled=move || busy.get()>
                        "Submit Claim"
                    </button>
                </form>
            </div>
        </Show>
    }
}

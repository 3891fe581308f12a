//! Claim detail page with withdraw for the claimer and an adjudication
//! entry point for admins.

#[cfg(test)]
#[path = "claim_detail_test.rs"]
mod claim_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::components::status_badge::ClaimBadge;
use crate::net::claims;
use crate::net::types::{Claim, ClaimStatus};
use crate::state::session::SessionState;
use crate::util::guard;

/// A pending claim can be withdrawn by its claimer (admins can always).
fn can_withdraw(state: &SessionState, claim: &Claim) -> bool {
    let pending = claim.status() == Some(ClaimStatus::Pending);
    state.is_admin() || (pending && state.user_id() == Some(claim.claimer_id))
}

#[component]
pub fn ClaimDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());
    let params = use_params_map();

    let claim = RwSignal::new(None::<Claim>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let claim_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    Effect::new(move || {
        let Some(id) = claim_id() else {
            return;
        };
        if !guard::can_render(&session.get(), None) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match claims::get(id).await {
                Ok(loaded) => claim.set(Some(loaded)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_withdraw = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let Some(id) = claim_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Withdraw this claim?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                match claims::remove(id).await {
                    Ok(()) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/claims");
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

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="claim-detail-page">
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    claim
                        .get()
                        .map(|loaded| {
                            let withdrawable = can_withdraw(&session.get(), &loaded);
                            let pending = loaded.status() == Some(ClaimStatus::Pending);
                            let admin = session.get().is_admin();
                            let item_href = format!("/items/{}", loaded.item_id);
                            let approve_href = format!("/claims/{}/approve", loaded.claim_id);
                            view! {
                                <div class="claim-detail">
                                    <div class="claim-detail__heading">
                                        <h1>
                                            {loaded.item_title.clone().unwrap_or_else(|| {
                                                format!("Claim #{}", loaded.claim_id)
                                            })}
                                        </h1>
                                        <ClaimBadge status=loaded.claim_status.clone()/>
                                    </div>
                                    <dl class="claim-detail__fields">
                                        <dt>"Claimed by"</dt>
                                        <dd>{loaded.claimer_name.clone().unwrap_or_default()}</dd>
                                        <dt>"Claimed on"</dt>
                                        <dd>{loaded.claimed_on.clone().unwrap_or_default()}</dd>
                                        <dt>"Reason"</dt>
                                        <dd>{loaded.claim_text.clone().unwrap_or_default()}</dd>
                                        <dt>"Decided by"</dt>
                                        <dd>{loaded.decider_name.clone().unwrap_or_default()}</dd>
                                        <dt>"Decided on"</dt>
                                        <dd>{loaded.decided_on.clone().unwrap_or_default()}</dd>
                                    </dl>
                                    <div class="claim-detail__actions">
                                        <a href=item_href>"View item"</a>
                                        <Show when=move || admin && pending>
                                            <a class="button" href=approve_href.clone()>
                                                "Adjudicate"
                                            </a>
                                        </Show>
                                        <Show when=move || withdrawable>
                                            <button
                                                class="button button--danger"
                                                disabled=move || busy.get()
                                                on:click=move |_| on_withdraw.run(())
                                            >
                                                "Withdraw Claim"
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

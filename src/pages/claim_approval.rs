//! Claim adjudication page. Admin-only: the route guard requires the
//! admin role here, everything else is ordinary claim display.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::components::status_badge::ClaimBadge;
use crate::net::claims;
use crate::net::types::{Claim, Role};
use crate::state::session::SessionState;
use crate::util::guard;

#[component]
pub fn ClaimApprovalPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install(session, Some(Role::Admin), navigate.clone());
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
        if !guard::can_render(&session.get(), Some(Role::Admin)) {
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

    let decide = {
        let navigate = navigate.clone();
        move |approve: bool| {
            if busy.get() {
                return;
            }
            let Some(id) = claim_id() else {
                return;
            };
            busy.set(true);
            error.set(None);
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let decided = if approve {
                        claims::approve(id).await
                    } else {
                        claims::reject(id).await
                    };
                    match decided {
                        Ok(_) => navigate("/claims", NavigateOptions::default()),
                        Err(err) => {
                            error.set(Some(err.to_string()));
                            busy.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&navigate, id, approve);
                busy.set(false);
            }
        }
    };
    let on_approve = {
        let decide = decide.clone();
        move |_ev: leptos::ev::MouseEvent| decide(true)
    };
    let on_reject = move |_ev: leptos::ev::MouseEvent| decide(false);

    view! {
        <Show
            when=move || guard::can_render(&session.get(), Some(Role::Admin))
            fallback=|| view! { <Loading/> }
        >
            <div class="claim-approval-page">
                <h1>"Adjudicate Claim"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    claim
                        .get()
                        .map(|loaded| {
                            let item_href = format!("/items/{}", loaded.item_id);
                            view! {
                                <div class="claim-approval">
                                    <div class="claim-approval__heading">
                                        <h2>
                                            {loaded.item_title.clone().unwrap_or_else(|| {
                                                format!("Claim #{}", loaded.claim_id)
                                            })}
                                        </h2>
                                        <ClaimBadge status=loaded.claim_status.clone()/>
                                    </div>
                                    <dl class="claim-approval__fields">
                                        <dt>"Claimed by"</dt>
                                        <dd>{loaded.claimer_name.clone().unwrap_or_default()}</dd>
                                        <dt>"Claimed on"</dt>
                                        <dd>{loaded.claimed_on.clone().unwrap_or_default()}</dd>
                                        <dt>"Stated reason"</dt>
                                        <dd>{loaded.claim_text.clone().unwrap_or_default()}</dd>
                                    </dl>
                                    <a href=item_href>"Inspect the item"</a>
                                </div>
                            }
                        })
                }}
                <div class="claim-approval__actions">
                    <button
                        class="button button--approve"
                        disabled=move || busy.get()
                        on:click=on_approve.clone()
                    >
                        "Approve"
                    </button>
                    <button
                        class="button button--danger"
                        disabled=move || busy.get()
                        on:click=on_reject.clone()
                    >
                        "Reject"
                    </button>
                </div>
            </div>
        </Show>
    }
}

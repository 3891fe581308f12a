//! Claim list page with a status filter.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::components::status_badge::ClaimBadge;
use crate::net::claims;
use crate::net::types::{Claim, ClaimStatus};
use crate::state::session::SessionState;
use crate::util::guard;

#[component]
pub fn ClaimsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());

    let claim_list = RwSignal::new(Vec::<Claim>::new());
    let list_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let status_filter = RwSignal::new(String::new());

    Effect::new(move || {
        let status = status_filter.get();
        if !guard::can_render(&session.get(), None) {
            return;
        }
        let filter = ClaimStatus::parse(&status);
        list_loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match claims::list(filter).await {
                Ok(list) => {
                    claim_list.set(list);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            list_loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter;
            list_loading.set(false);
        }
    });

    let is_admin = move || session.get().is_admin();

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="claims-page">
                <div class="claims-page__toolbar">
                    <h1>"Claims"</h1>
                    <select
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All statuses"</option>
                        {ClaimStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! { <option value=status.as_str()>{status.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !list_loading.get() fallback=|| view! { <Loading/> }>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Item"</th>
                                <th>"Claimed by"</th>
                                <th>"On"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let admin = is_admin();
                                claim_list
                                    .get()
                                    .into_iter()
                                    .map(|claim| {
                                        let href = format!("/claims/{}", claim.claim_id);
                                        let approve_href =
                                            format!("/claims/{}/approve", claim.claim_id);
                                        let pending =
                                            claim.status() == Some(ClaimStatus::Pending);
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=href>
                                                        {claim.item_title.clone().unwrap_or_default()}
                                                    </a>
                                                </td>
                                                <td>
                                                    {claim.claimer_name.clone().unwrap_or_default()}
                                                </td>
                                                <td>{claim.claimed_on.clone().unwrap_or_default()}</td>
                                                <td>
                                                    <ClaimBadge status=claim.claim_status.clone()/>
                                                </td>
                                                <td>
                                                    <Show when=move || admin && pending>
                                                        <a href=approve_href.clone()>"Adjudicate"</a>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || claim_list.get().is_empty()>
                        <p class="empty-note">"No claims match the current filter."</p>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

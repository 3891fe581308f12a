//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-aware overview: everyone sees item tallies and quick actions;
//! admins additionally see the pending-claims queue they are expected to
//! work through.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::components::status_badge::ItemBadge;
use crate::net::claims;
use crate::net::items::{self, ItemQuery};
use crate::net::types::{Claim, ClaimStatus, Item, ItemStatus};
use crate::state::session::SessionState;
use crate::util::guard;

/// Item tallies for the overview cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ItemCounts {
    lost: usize,
    found: usize,
    claimed: usize,
}

fn summarize(item_list: &[Item]) -> ItemCounts {
    let mut counts = ItemCounts::default();
    for item in item_list {
        match item.status() {
            Some(ItemStatus::Lost) => counts.lost += 1,
            Some(ItemStatus::Found) => counts.found += 1,
            Some(ItemStatus::Claimed) => counts.claimed += 1,
            _ => {}
        }
    }
    counts
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());

    let item_list = RwSignal::new(Vec::<Item>::new());
    let pending_claims = RwSignal::new(Vec::<Claim>::new());
    let error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = session.get();
        if !guard::can_render(&state, None) {
            return;
        }
        requested.set(true);
        let load_queue = state.is_admin();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match items::list(&ItemQuery::default()).await {
                Ok(list) => item_list.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            if load_queue {
                if let Ok(list) = claims::list(Some(ClaimStatus::Pending)).await {
                    pending_claims.set(list);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = load_queue;
        }
    });

    let counts = move || summarize(&item_list.get());
    let greeting = move || {
        session
            .get()
            .user()
            .map(|u| format!("Welcome back, {}!", u.name))
            .unwrap_or_default()
    };
    let is_admin = move || session.get().is_admin();

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="dashboard-page">
                <h1>{greeting}</h1>
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dashboard-cards">
                    <div class="dashboard-card">
                        <span class="dashboard-card__count">{move || counts().lost}</span>
                        <span>"Lost items"</span>
                    </div>
                    <div class="dashboard-card">
                        <span class="dashboard-card__count">{move || counts().found}</span>
                        <span>"Found items"</span>
                    </div>
                    <div class="dashboard-card">
                        <span class="dashboard-card__count">{move || counts().claimed}</span>
                        <span>"Awaiting handover"</span>
                    </div>
                </div>
                <div class="dashboard-actions">
                    <a class="button" href="/reports/new">"File a Report"</a>
                    <a class="button" href="/items">"Browse Items"</a>
                    <a class="button" href="/claims">"My Claims"</a>
                </div>
                <Show when=is_admin>
                    <section class="dashboard-queue">
                        <h2>"Pending claims"</h2>
                        <Show
                            when=move || !pending_claims.get().is_empty()
                            fallback=|| view! { <p class="empty-note">"Queue is clear."</p> }
                        >
                            <ul class="dashboard-queue__list">
                                {move || {
                                    pending_claims
                                        .get()
                                        .into_iter()
                                        .map(|claim| {
                                            let href =
                                                format!("/claims/{}/approve", claim.claim_id);
                                            view! {
                                                <li>
                                                    <a href=href>
                                                        {claim
                                                            .item_title
                                                            .clone()
                                                            .unwrap_or_else(|| format!(
                                                                "Claim #{}", claim.claim_id
                                                            ))}
                                                    </a>
                                                    <span>
                                                        {claim
                                                            .claimer_name
                                                            .clone()
                                                            .unwrap_or_default()}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </section>
                </Show>
                <section class="dashboard-recent">
                    <h2>"Recently registered"</h2>
                    <ul class="dashboard-recent__list">
                        {move || {
                            item_list
                                .get()
                                .into_iter()
                                .take(5)
                                .map(|item| {
                                    let href = format!("/items/{}", item.item_id);
                                    view! {
                                        <li>
                                            <a href=href>{item.title.clone()}</a>
                                            <ItemBadge status=item.current_status.clone()/>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </div>
        </Show>
    }
}

//! Report detail page with status transitions for the reporter and admins.

#[cfg(test)]
#[path = "report_detail_test.rs"]
mod report_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::components::status_badge::ReportBadge;
use crate::net::reports;
use crate::net::types::{Report, ReportStatus};
use crate::state::session::SessionState;
use crate::util::guard;

/// Whether the current session may transition this report's status.
/// Mirrors the server rule: the reporter or an admin.
fn can_update_status(state: &SessionState, report: &Report) -> bool {
    state.is_admin() || state.user_id() == Some(report.reporter_id)
}

#[component]
pub fn ReportDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());
    let params = use_params_map();

    let report = RwSignal::new(None::<Report>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let report_id = move || {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    Effect::new(move || {
        let Some(id) = report_id() else {
            return;
        };
        if !guard::can_render(&session.get(), None) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match reports::get(id).await {
                Ok(loaded) => report.set(Some(loaded)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_transition = Callback::new(move |status: ReportStatus| {
        if busy.get() {
            return;
        }
        let Some(id) = report_id() else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match reports::update_status(id, status).await {
                Ok(updated) => {
                    report.set(Some(updated));
                    error.set(None);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
            busy.set(false);
        }
    });

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="report-detail-page">
                <Show when=move || error.get().is_some()>
                    <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    report
                        .get()
                        .map(|loaded| {
                            let may_transition = can_update_status(&session.get(), &loaded);
                            let item_href = format!("/items/{}", loaded.item_id);
                            view! {
                                <div class="report-detail">
                                    <div class="report-detail__heading">
                                        <h1>
                                            {loaded.item_title.clone().unwrap_or_else(|| {
                                                format!("Report #{}", loaded.report_id)
                                            })}
                                        </h1>
                                        <ReportBadge status=loaded.status.clone()/>
                                    </div>
                                    <dl class="report-detail__fields">
                                        <dt>"Type"</dt>
                                        <dd>{loaded.report_type.clone()}</dd>
                                        <dt>"Location"</dt>
                                        <dd>{loaded.location_name.clone().unwrap_or_default()}</dd>
                                        <dt>"Date"</dt>
                                        <dd>{loaded.reported_date.clone().unwrap_or_default()}</dd>
                                        <dt>"Reported by"</dt>
                                        <dd>{loaded.reporter_name.clone().unwrap_or_default()}</dd>
                                        <dt>"Details"</dt>
                                        <dd>{loaded.details.clone().unwrap_or_default()}</dd>
                                    </dl>
                                    <a href=item_href>"View item"</a>
                                    <Show when=move || may_transition>
                                        <div class="report-detail__transitions">
                                            {ReportStatus::ALL
                                                .into_iter()
                                                .map(|status| {
                                                    view! {
                                                        <button
                                                            class="button"
                                                            disabled=move || busy.get()
                                                            on:click=move |_| {
                                                                on_transition.run(status)
                                                            }
                                                        >
                                                            {format!("Mark {}", status.label())}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </div>
        </Show>
    }
}

//! Report list page with type/status filters.

#[cfg(test)]
#[path = "reports_page_test.rs"]
mod reports_page_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::components::status_badge::ReportBadge;
use crate::net::reports::{self, ReportQuery};
use crate::net::types::{Report, ReportStatus, ReportType};
use crate::state::session::SessionState;
use crate::util::guard;

fn build_report_query(report_type: &str, status: &str) -> ReportQuery {
    ReportQuery {
        report_type: ReportType::parse(report_type),
        status: ReportStatus::parse(status),
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());

    let report_list = RwSignal::new(Vec::<Report>::new());
    let list_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let type_filter = RwSignal::new(String::new());
    let status_filter = RwSignal::new(String::new());

    Effect::new(move || {
        let kind = type_filter.get();
        let status = status_filter.get();
        if !guard::can_render(&session.get(), None) {
            return;
        }
        let query = build_report_query(&kind, &status);
        list_loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match reports::list(&query).await {
                Ok(list) => {
                    report_list.set(list);
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

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="reports-page">
                <div class="reports-page__toolbar">
                    <h1>"Reports"</h1>
                    <a class="reports-page__new" href="/reports/new">"File Report"</a>
                </div>
                <div class="reports-page__filters">
                    <select
                        prop:value=move || type_filter.get()
                        on:change=move |ev| type_filter.set(event_target_value(&ev))
                    >
                        <option value="">"Lost & found"</option>
                        {ReportType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! { <option value=kind.as_str()>{kind.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                    <select
                        prop:value=move || status_filter.get()
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                    >
                        <option value="">"All statuses"</option>
                        {ReportStatus::ALL
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
                                <th>"Type"</th>
                                <th>"Location"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th>"Reporter"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                report_list
                                    .get()
                                    .into_iter()
                                    .map(|report| {
                                        let href = format!("/reports/{}", report.report_id);
                                        let kind = ReportType::parse(&report.report_type)
                                            .map_or_else(
                                                || report.report_type.clone(),
                                                |k| k.label().to_owned(),
                                            );
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=href>
                                                        {report.item_title.clone().unwrap_or_default()}
                                                    </a>
                                                </td>
                                                <td>{kind}</td>
                                                <td>
                                                    {report.location_name.clone().unwrap_or_default()}
                                                </td>
                                                <td>
                                                    {report.reported_date.clone().unwrap_or_default()}
                                                </td>
                                                <td>
                                                    <ReportBadge status=report.status.clone()/>
                                                </td>
                                                <td>
                                                    {report.reporter_name.clone().unwrap_or_default()}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || report_list.get().is_empty()>
                        <p class="empty-note">"No reports match the current filters."</p>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}

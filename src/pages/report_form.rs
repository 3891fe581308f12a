//! Lost/found report form.
//!
//! The server links the report to an existing item when an id is known,
//! or registers a fresh item from the given title; this form always files
//! by title, which covers both walk-up cases.

#[cfg(test)]
#[path = "report_form_test.rs"]
mod report_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::net::{items, reports};
use crate::net::types::{Location, ReportPayload, ReportType};
use crate::state::session::SessionState;
use crate::util::guard;

fn build_report_payload(
    report_type: &str,
    item_title: &str,
    location_id: &str,
    reported_date: &str,
    details: &str,
) -> Result<ReportPayload, &'static str> {
    let Some(kind) = ReportType::parse(report_type) else {
        return Err("Choose whether the item was lost or found.");
    };
    let item_title = item_title.trim();
    if item_title.is_empty() {
        return Err("Describe the item with a short title.");
    }
    let details = details.trim();
    let reported_date = reported_date.trim();
    Ok(ReportPayload {
        item_id: None,
        item_title: Some(item_title.to_owned()),
        report_type: kind.as_str().to_owned(),
        location_id: location_id.parse::<i64>().ok(),
        location_name: None,
        reported_date: (!reported_date.is_empty()).then(|| reported_date.to_owned()),
        details: (!details.is_empty()).then(|| details.to_owned()),
    })
}

#[component]
pub fn ReportFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    guard::install(session, None, navigate.clone());

    let report_type = RwSignal::new(String::new());
    let item_title = RwSignal::new(String::new());
    let location_id = RwSignal::new(String::new());
    let reported_date = RwSignal::new(String::new());
    let details = RwSignal::new(String::new());
    let locations = RwSignal::new(Vec::<Location>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let locations_requested = RwSignal::new(false);
    Effect::new(move || {
        if locations_requested.get() {
            return;
        }
        if !guard::can_render(&session.get(), None) {
            return;
        }
        locations_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(list) = items::locations().await {
                locations.set(list);
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match build_report_payload(
            &report_type.get(),
            &item_title.get(),
            &location_id.get(),
            &reported_date.get(),
            &details.get(),
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
            leptos::task::spawn_local(async move {
                match reports::create(&payload).await {
                    Ok(report) => navigate(
                        &format!("/reports/{}", report.report_id),
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
                <h1>"File a Report"</h1>
                <form class="entity-form" on:submit=on_submit.clone()>
                    <label class="entity-form__field">
                        <span>"Report type"</span>
                        <select
                            prop:value=move || report_type.get()
                            on:change=move |ev| report_type.set(event_target_value(&ev))
                        >
                            <option value="">"Choose…"</option>
                            {ReportType::ALL
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <option value=kind.as_str()>
                                            {format!("I {} an item", kind.as_str())}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="entity-form__field">
                        <span>"Item title"</span>
                        <input
                            type="text"
                            placeholder="e.g. Blue backpack"
                            prop:value=move || item_title.get()
                            on:input=move |ev| item_title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="entity-form__field">
                        <span>"Location"</span>
                        <select
                            prop:value=move || location_id.get()
                            on:change=move |ev| location_id.set(event_target_value(&ev))
                        >
                            <option value="">"Unknown"</option>
                            {move || {
                                locations
                                    .get()
                                    .into_iter()
                                    .map(|l| {
                                        view! {
                                            <option value=l.location_id.to_string()>
                                                {l.location_name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="entity-form__field">
                        <span>"Date"</span>
                        <input
                            type="date"
                            prop:value=move || reported_date.get()
                            on:input=move |ev| reported_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="entity-form__field">
                        <span>"Details"</span>
                        <textarea
                            placeholder="Anything that helps identify it"
                            prop:value=move || details.get()
                            on:input=move |ev| details.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="page-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button" type="submit" disabled=move || busy.get()>
                        "Submit Report"
                    </button>
                </form>
            </div>
        </Show>
    }
}

//! Current-user profile view.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::state::session::SessionState;
use crate::util::guard;

fn display(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("—").to_owned()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    guard::install(session, None, use_navigate());

    let field = move |label: &'static str, read: fn(&SessionState) -> String| {
        view! {
            <div class="profile-field">
                <dt>{label}</dt>
                <dd>{move || session.with(read)}</dd>
            </div>
        }
    };

    view! {
        <Show
            when=move || guard::can_render(&session.get(), None)
            fallback=|| view! { <Loading/> }
        >
            <div class="profile-page">
                <h1>"My Profile"</h1>
                <dl class="profile-fields">
                    {field("Name", |s| {
                        display(s.user().map(|u| u.name.as_str()))
                    })}
                    {field("Roll number", |s| {
                        display(s.user().map(|u| u.roll_number.as_str()))
                    })}
                    {field("Email", |s| {
                        display(s.user().and_then(|u| u.email.as_deref()))
                    })}
                    {field("Phone", |s| {
                        display(s.user().and_then(|u| u.phone.as_deref()))
                    })}
                    {field("Branch", |s| {
                        display(s.user().and_then(|u| u.branch.as_deref()))
                    })}
                    {field("School", |s| {
                        display(s.user().and_then(|u| u.school.as_deref()))
                    })}
                    {field("Role", |s| {
                        display(s.user().and_then(|u| u.role_name.as_deref()))
                    })}
                </dl>
            </div>
        </Show>
    }
}

//! Landing view for authenticated visitors lacking a required role.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="message-page">
            <h1>"Not Authorized"</h1>
            <p>"Your account does not have permission to view that page."</p>
            <a href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}

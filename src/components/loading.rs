//! Loading placeholder shown while deferred decisions resolve.

use leptos::prelude::*;

/// Centered spinner used by guarded routes and slow lists.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <div class="loading__spinner"></div>
            <span class="loading__label">"Loading…"</span>
        </div>
    }
}

//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The one place session state is surfaced on every screen: navigation
//! links vary with authentication, and logout lives here.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Application header with auth-aware navigation.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let is_authenticated = move || session.get().is_authenticated();
    let display_name = move || {
        session
            .get()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };

    let on_logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        session::logout(session);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Campus Lost & Found"
            </a>
            <nav class="site-header__nav">
                <Show
                    when=is_authenticated
                    fallback=|| {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        }
                    }
                >
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/items">"Items"</a>
                    <a href="/reports">"Reports"</a>
                    <a href="/claims">"Claims"</a>
                    <a href="/profile">{display_name}</a>
                    <button class="site-header__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </nav>
        </header>
    }
}

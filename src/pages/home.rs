//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let is_authenticated = move || session.get().is_authenticated();

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Campus Lost & Found"</h1>
                <p>
                    "Lost something on campus? Found something that isn't yours? "
                    "Report it here and help it find its way home."
                </p>
                <div class="home-hero__actions">
                    <Show
                        when=is_authenticated
                        fallback=|| {
                            view! {
                                <a class="home-cta" href="/login">"Login"</a>
                                <a class="home-cta home-cta--secondary" href="/register">
                                    "Register"
                                </a>
                            }
                        }
                    >
                        <a class="home-cta" href="/dashboard">"Go to Dashboard"</a>
                        <a class="home-cta home-cta--secondary" href="/reports/new">
                            "Report an Item"
                        </a>
                    </Show>
                </div>
            </section>
            <section class="home-steps">
                <div class="home-step">
                    <h3>"Report"</h3>
                    <p>"File a lost or found report with a photo and location."</p>
                </div>
                <div class="home-step">
                    <h3>"Browse"</h3>
                    <p>"Search registered items by category, status, or keyword."</p>
                </div>
                <div class="home-step">
                    <h3>"Claim"</h3>
                    <p>"Prove it's yours and an admin will hand it over."</p>
                </div>
            </section>
        </div>
    }
}

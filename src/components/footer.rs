//! Static site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>"Campus Lost & Found Portal"</span>
            <span class="site-footer__hint">"Report it. Find it. Claim it."</span>
        </footer>
    }
}

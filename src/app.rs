//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::pages::{
    claim_approval::ClaimApprovalPage, claim_detail::ClaimDetailPage, claim_form::ClaimFormPage,
    claims::ClaimsPage, dashboard::DashboardPage, home::HomePage, item_detail::ItemDetailPage,
    item_form::ItemFormPage, items::ItemsPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, report_detail::ReportDetailPage, report_form::ReportFormPage,
    reports::ReportsPage, unauthorized::UnauthorizedPage,
};
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, kicks off the one-time bootstrap
/// that resolves a persisted token into a validated session, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Resolve any persisted credential before protected routes may render.
    session::bootstrap(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/lostfound.css"/>
        <Title text="Campus Lost & Found"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("items") view=ItemsPage/>
                    <Route path=(StaticSegment("items"), StaticSegment("new")) view=ItemFormPage/>
                    <Route path=(StaticSegment("items"), ParamSegment("id")) view=ItemDetailPage/>
                    <Route
                        path=(StaticSegment("items"), ParamSegment("id"), StaticSegment("edit"))
                        view=ItemFormPage
                    />
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                    <Route path=(StaticSegment("reports"), StaticSegment("new")) view=ReportFormPage/>
                    <Route path=(StaticSegment("reports"), ParamSegment("id")) view=ReportDetailPage/>
                    <Route path=StaticSegment("claims") view=ClaimsPage/>
                    <Route path=(StaticSegment("claims"), StaticSegment("new")) view=ClaimFormPage/>
                    <Route path=(StaticSegment("claims"), ParamSegment("id")) view=ClaimDetailPage/>
                    <Route
                        path=(StaticSegment("claims"), ParamSegment("id"), StaticSegment("approve"))
                        view=ClaimApprovalPage
                    />
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

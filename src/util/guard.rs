//! Route guard: render-or-redirect decisions for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical gating behavior: defer while the
//! session bootstrap is still resolving, send unauthenticated visitors to
//! `/login` (remembering where they were headed), and send authenticated
//! visitors lacking a required role to `/unauthorized`. The decision is a
//! pure function of session state; the guard never fetches or mutates.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Bootstrap still resolving: render a placeholder, defer the decision.
    Loading,
    /// Not authenticated: redirect to the login view.
    RedirectToLogin,
    /// Authenticated but lacking the required role.
    RedirectToUnauthorized,
    /// Render the requested view.
    Render,
}

/// The guard's decision table.
pub fn decide(
    loading: bool,
    authenticated: bool,
    required_role: Option<Role>,
    actual_role: Option<Role>,
) -> RouteDecision {
    if loading {
        return RouteDecision::Loading;
    }
    if !authenticated {
        return RouteDecision::RedirectToLogin;
    }
    match required_role {
        Some(role) if actual_role != Some(role) => RouteDecision::RedirectToUnauthorized,
        _ => RouteDecision::Render,
    }
}

/// [`decide`] applied to the shared session state.
pub fn decide_for(state: &SessionState, required_role: Option<Role>) -> RouteDecision {
    decide(
        state.loading(),
        state.is_authenticated(),
        required_role,
        state.role(),
    )
}

/// Whether the protected content may render right now.
pub fn can_render(state: &SessionState, required_role: Option<Role>) -> bool {
    decide_for(state, required_role) == RouteDecision::Render
}

/// Login target remembering the original destination.
pub fn login_redirect_target(from: &str) -> String {
    format!("/login?from={}", urlencoding::encode(from))
}

/// Navigation target for a decision, if it redirects.
pub fn redirect_target(decision: RouteDecision, from: &str) -> Option<String> {
    match decision {
        RouteDecision::RedirectToLogin => Some(login_redirect_target(from)),
        RouteDecision::RedirectToUnauthorized => Some("/unauthorized".to_owned()),
        RouteDecision::Loading | RouteDecision::Render => None,
    }
}

/// Install the guard on the current route: whenever the session state
/// settles into a redirecting decision, navigate accordingly.
pub fn install<F>(session: RwSignal<SessionState>, required_role: Option<Role>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    Effect::new(move || {
        let state = session.get();
        let decision = decide_for(&state, required_role);
        if let Some(target) = redirect_target(decision, &location.pathname.get()) {
            navigate(&target, NavigateOptions::default());
        }
    });
}

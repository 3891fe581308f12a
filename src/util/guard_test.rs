use super::*;

// =============================================================
// Decision table
// =============================================================

#[test]
fn loading_defers_regardless_of_other_inputs() {
    for authenticated in [false, true] {
        for required in [None, Some(Role::Admin)] {
            for actual in [None, Some(Role::Student), Some(Role::Admin)] {
                assert_eq!(
                    decide(true, authenticated, required, actual),
                    RouteDecision::Loading
                );
            }
        }
    }
}

#[test]
fn unauthenticated_redirects_to_login() {
    assert_eq!(
        decide(false, false, None, None),
        RouteDecision::RedirectToLogin
    );
    assert_eq!(
        decide(false, false, Some(Role::Admin), None),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn authenticated_without_required_role_renders() {
    assert_eq!(
        decide(false, true, None, Some(Role::Student)),
        RouteDecision::Render
    );
    assert_eq!(decide(false, true, None, None), RouteDecision::Render);
}

#[test]
fn role_mismatch_redirects_to_unauthorized() {
    assert_eq!(
        decide(false, true, Some(Role::Admin), Some(Role::Student)),
        RouteDecision::RedirectToUnauthorized
    );
    // Accounts with no resolvable role never satisfy a requirement.
    assert_eq!(
        decide(false, true, Some(Role::Admin), None),
        RouteDecision::RedirectToUnauthorized
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(
        decide(false, true, Some(Role::Admin), Some(Role::Admin)),
        RouteDecision::Render
    );
    assert_eq!(
        decide(false, true, Some(Role::Staff), Some(Role::Staff)),
        RouteDecision::Render
    );
}

// =============================================================
// Session-state integration
// =============================================================

#[test]
fn decide_for_reads_session_state() {
    let mut state = SessionState::default();
    assert_eq!(decide_for(&state, None), RouteDecision::RedirectToLogin);

    let epoch = state.begin_loading();
    assert_eq!(decide_for(&state, None), RouteDecision::Loading);
    assert!(!can_render(&state, None));

    let profile: crate::net::types::UserProfile = serde_json::from_value(serde_json::json!({
        "user_id": 1, "name": "Alice", "roll_number": "R001", "role_name": "student",
    }))
    .expect("test profile");
    state.resolve(epoch, Some(profile));
    assert!(can_render(&state, None));
    assert!(!can_render(&state, Some(Role::Admin)));
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn login_target_remembers_origin() {
    assert_eq!(
        login_redirect_target("/items/7/edit"),
        "/login?from=%2Fitems%2F7%2Fedit"
    );
}

#[test]
fn redirect_target_per_decision() {
    assert_eq!(
        redirect_target(RouteDecision::RedirectToLogin, "/claims"),
        Some("/login?from=%2Fclaims".to_owned())
    );
    assert_eq!(
        redirect_target(RouteDecision::RedirectToUnauthorized, "/claims"),
        Some("/unauthorized".to_owned())
    );
    assert_eq!(redirect_target(RouteDecision::Render, "/claims"), None);
    assert_eq!(redirect_target(RouteDecision::Loading, "/claims"), None);
}

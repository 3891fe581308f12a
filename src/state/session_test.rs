use super::*;

fn profile(role: &str) -> UserProfile {
    serde_json::from_value(serde_json::json!({
        "user_id": 1,
        "name": "Alice",
        "roll_number": "R001",
        "role_name": role,
    }))
    .expect("test profile")
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_unauthenticated_and_not_loading() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading());
    assert!(state.user().is_none());
    assert_eq!(state.role(), None);
}

// =============================================================
// Bootstrap / login resolution
// =============================================================

#[test]
fn begin_loading_raises_loading_flag() {
    let mut state = SessionState::default();
    state.begin_loading();
    assert!(state.loading());
    assert!(!state.is_authenticated());
}

#[test]
fn resolving_with_profile_authenticates() {
    let mut state = SessionState::default();
    let epoch = state.begin_loading();
    assert!(state.resolve(epoch, Some(profile("admin"))));
    assert!(state.is_authenticated());
    assert!(!state.loading());
    assert!(state.is_admin());
    assert_eq!(state.user().map(|u| u.roll_number.as_str()), Some("R001"));
}

#[test]
fn resolving_without_profile_ends_loading_unauthenticated() {
    // Invalid persisted token: /auth/me answered 401.
    let mut state = SessionState::default();
    let epoch = state.begin_loading();
    assert!(state.resolve(epoch, None));
    assert!(!state.is_authenticated());
    assert!(!state.loading());
}

#[test]
fn authentication_tracks_profile_presence_not_token_presence() {
    let mut state = SessionState::default();
    let epoch = state.begin_loading();
    assert!(!state.is_authenticated(), "loading is not authenticated");
    state.resolve(epoch, Some(profile("student")));
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Student));
    assert!(!state.is_admin());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn clear_resets_any_prior_state() {
    let mut state = SessionState::default();
    let epoch = state.begin_loading();
    state.resolve(epoch, Some(profile("staff")));
    state.clear();
    assert!(!state.is_authenticated());
    assert!(!state.loading());
    assert_eq!(state.role(), None);
}

#[test]
fn clear_is_safe_when_already_unauthenticated() {
    let mut state = SessionState::default();
    state.clear();
    assert!(!state.is_authenticated());
    assert!(!state.loading());
}

// =============================================================
// Stale-resolution handling
// =============================================================

#[test]
fn resolution_after_logout_is_discarded() {
    let mut state = SessionState::default();
    let epoch = state.begin_loading();
    state.clear();
    assert!(!state.resolve(epoch, Some(profile("student"))));
    assert!(!state.is_authenticated(), "late profile must not revive session");
}

#[test]
fn resolution_after_newer_login_is_discarded() {
    let mut state = SessionState::default();
    let stale = state.begin_loading();
    let newer = state.begin_loading();
    assert!(state.resolve(newer, Some(profile("admin"))));
    assert!(!state.resolve(stale, None));
    assert!(state.is_admin(), "stale failure must not clobber newer session");
}

#[test]
fn each_resolution_epoch_is_single_use() {
    let mut state = SessionState::default();
    let epoch = state.begin_loading();
    assert!(state.resolve(epoch, None));
    assert!(!state.resolve(epoch, Some(profile("admin"))));
    assert!(!state.is_authenticated());
}

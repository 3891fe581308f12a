use super::*;
use crate::net::types::UserProfile;

fn session_with(role: &str, user_id: i64) -> SessionState {
    let mut state = SessionState::default();
    let epoch = state.begin_loading();
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "user_id": user_id,
        "name": "Tester",
        "roll_number": "R100",
        "role_name": role,
    }))
    .expect("test profile");
    state.resolve(epoch, Some(profile));
    state
}

fn report_by(reporter_id: i64) -> Report {
    serde_json::from_value(serde_json::json!({
        "report_id": 5,
        "item_id": 3,
        "reporter_id": reporter_id,
        "report_type": "lost",
    }))
    .expect("test report")
}

#[test]
fn reporter_may_transition_their_report() {
    assert!(can_update_status(&session_with("student", 7), &report_by(7)));
}

#[test]
fn admin_may_transition_any_report() {
    assert!(can_update_status(&session_with("admin", 1), &report_by(7)));
}

#[test]
fn other_users_may_not_transition() {
    assert!(!can_update_status(&session_with("student", 8), &report_by(7)));
    assert!(!can_update_status(&SessionState::default(), &report_by(7)));
}

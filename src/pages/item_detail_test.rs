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

fn item_created_by(created_by: Option<i64>) -> Item {
    serde_json::from_value(serde_json::json!({
        "item_id": 3,
        "title": "Blue backpack",
        "created_by": created_by,
    }))
    .expect("test item")
}

#[test]
fn owner_can_modify_their_item() {
    let state = session_with("student", 7);
    assert!(can_modify(&state, &item_created_by(Some(7))));
}

#[test]
fn non_owner_cannot_modify() {
    let state = session_with("student", 7);
    assert!(!can_modify(&state, &item_created_by(Some(8))));
    assert!(!can_modify(&state, &item_created_by(None)));
}

#[test]
fn admin_can_modify_any_item() {
    let state = session_with("admin", 1);
    assert!(can_modify(&state, &item_created_by(Some(8))));
}

#[test]
fn unauthenticated_session_cannot_modify() {
    let state = SessionState::default();
    assert!(!can_modify(&state, &item_created_by(Some(7))));
}

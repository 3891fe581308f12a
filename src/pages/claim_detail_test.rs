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

fn claim(claimer_id: i64, status: &str) -> Claim {
    serde_json::from_value(serde_json::json!({
        "claim_id": 11,
        "item_id": 3,
        "claimer_id": claimer_id,
        "claim_status": status,
    }))
    .expect("test claim")
}

#[test]
fn claimer_can_withdraw_their_pending_claim() {
    assert!(can_withdraw(&session_with("student", 7), &claim(7, "pending")));
}

#[test]
fn claimer_cannot_withdraw_a_decided_claim() {
    assert!(!can_withdraw(&session_with("student", 7), &claim(7, "approved")));
}

#[test]
fn other_users_cannot_withdraw() {
    assert!(!can_withdraw(&session_with("student", 8), &claim(7, "pending")));
}

#[test]
fn admin_can_withdraw_regardless_of_status() {
    assert!(can_withdraw(&session_with("admin", 1), &claim(7, "rejected")));
}

use super::*;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn token_response_parses_login_payload() {
    let parsed: TokenResponse =
        serde_json::from_str(r#"{"access_token":"tok123","token_type":"bearer"}"#)
            .expect("token payload");
    assert_eq!(parsed.access_token, "tok123");
    assert_eq!(parsed.token_type, "bearer");
}

#[test]
fn token_response_ignores_extra_login_fields() {
    // /auth/login also embeds a user object; only the token matters here.
    let parsed: TokenResponse = serde_json::from_str(
        r#"{"access_token":"tok123","token_type":"bearer","user":{"user_id":1,"name":"Alice"}}"#,
    )
    .expect("token payload with user");
    assert_eq!(parsed.access_token, "tok123");
}

#[test]
fn user_profile_parses_me_payload_and_resolves_admin() {
    let parsed: UserProfile = serde_json::from_str(
        r#"{"user_id":1,"name":"Alice","email":"alice@campus.edu","branch":null,
            "roll_number":"R001","school":"Engineering","phone":null,
            "role_name":"admin","created_at":"2026-01-12T09:30:00"}"#,
    )
    .expect("me payload");
    assert_eq!(parsed.user_id, 1);
    assert!(parsed.is_admin());
    assert_eq!(parsed.role(), Some(Role::Admin));
}

#[test]
fn user_profile_tolerates_missing_optional_fields() {
    let parsed: UserProfile =
        serde_json::from_str(r#"{"user_id":7,"name":"Bob","roll_number":"R007"}"#)
            .expect("minimal profile");
    assert_eq!(parsed.role(), None);
    assert!(!parsed.is_admin());
}

#[test]
fn role_parse_is_a_closed_set() {
    assert_eq!(Role::parse("student"), Some(Role::Student));
    assert_eq!(Role::parse("staff"), Some(Role::Staff));
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse("Admin"), None);
}

#[test]
fn register_request_omits_absent_optionals() {
    let payload = RegisterRequest {
        name: "Bob".to_owned(),
        roll_number: "R007".to_owned(),
        password: "hunter2".to_owned(),
        ..RegisterRequest::default()
    };
    let json = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"name":"Bob","roll_number":"R007","password":"hunter2"})
    );
}

// =============================================================
// Domain payloads
// =============================================================

#[test]
fn item_parses_listing_payload_with_images() {
    let parsed: Item = serde_json::from_str(
        r#"{"item_id":3,"title":"Blue backpack","category_id":2,"description":"Left in lab",
            "created_by":1,"created_on":"2026-02-01T10:00:00","current_status":"found",
            "creator_name":"Alice","category_name":"Bags",
            "images":[{"image_id":9,"item_id":3,"file_path":"/uploads/abc.jpg"}]}"#,
    )
    .expect("item payload");
    assert_eq!(parsed.status(), Some(ItemStatus::Found));
    assert_eq!(parsed.images.len(), 1);
    assert_eq!(parsed.images[0].file_path, "/uploads/abc.jpg");
}

#[test]
fn item_defaults_images_when_absent() {
    let parsed: Item = serde_json::from_str(r#"{"item_id":4,"title":"Umbrella"}"#).expect("item");
    assert!(parsed.images.is_empty());
    assert_eq!(parsed.status(), None);
}

#[test]
fn claim_parses_adjudicated_payload() {
    let parsed: Claim = serde_json::from_str(
        r#"{"claim_id":11,"item_id":3,"claimer_id":7,"claim_text":"It has my initials",
            "claim_status":"approved","decided_by":1,"decider_name":"Alice",
            "item_title":"Blue backpack","claimer_name":"Bob"}"#,
    )
    .expect("claim payload");
    assert_eq!(parsed.status(), Some(ClaimStatus::Approved));
    assert_eq!(parsed.decider_name.as_deref(), Some("Alice"));
}

#[test]
fn item_payload_skips_unset_fields() {
    let payload = ItemPayload {
        title: "Umbrella".to_owned(),
        current_status: Some(ItemStatus::Lost.as_str().to_owned()),
        ..ItemPayload::default()
    };
    let json = serde_json::to_value(&payload).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"title":"Umbrella","current_status":"lost"})
    );
}

// =============================================================
// Status vocabularies
// =============================================================

#[test]
fn item_status_parse_rejects_unknown_values() {
    assert_eq!(ItemStatus::parse("lost"), Some(ItemStatus::Lost));
    assert_eq!(ItemStatus::parse("eaten"), None);
}

#[test]
fn status_string_forms_are_stable() {
    for status in ItemStatus::ALL {
        assert_eq!(ItemStatus::parse(status.as_str()), Some(status));
    }
    for status in ClaimStatus::ALL {
        assert_eq!(ClaimStatus::parse(status.as_str()), Some(status));
    }
    for status in ReportStatus::ALL {
        assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
    }
    for kind in ReportType::ALL {
        assert_eq!(ReportType::parse(kind.as_str()), Some(kind));
    }
}

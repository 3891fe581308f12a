use super::*;

// =============================================================
// Authorization header derivation
// =============================================================

#[test]
fn authorization_header_present_when_token_stored() {
    assert_eq!(
        authorization_header(Some("tok123")),
        Some("Bearer tok123".to_owned())
    );
}

#[test]
fn authorization_header_absent_without_token() {
    assert_eq!(authorization_header(None), None);
}

// =============================================================
// URL and body builders
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url("/auth/me"), "http://localhost:8000/auth/me");
}

#[test]
fn query_string_is_empty_for_no_pairs() {
    assert_eq!(query_string(&[]), "");
}

#[test]
fn query_string_encodes_values() {
    let pairs = [
        ("status", "lost".to_owned()),
        ("search", "blue backpack".to_owned()),
    ];
    assert_eq!(query_string(&pairs), "?status=lost&search=blue%20backpack");
}

#[test]
fn form_body_encodes_credentials() {
    let pairs = [
        ("username", "R001".to_owned()),
        ("password", "p&ss=word".to_owned()),
    ];
    assert_eq!(form_body(&pairs), "username=R001&password=p%26ss%3Dword");
}

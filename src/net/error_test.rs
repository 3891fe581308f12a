use super::*;

#[test]
fn from_status_extracts_server_detail() {
    let err = ApiError::from_status(401, r#"{"detail":"Incorrect credentials"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 401,
            detail: "Incorrect credentials".to_owned()
        }
    );
    assert_eq!(err.to_string(), "Incorrect credentials");
}

#[test]
fn from_status_falls_back_on_missing_detail() {
    let err = ApiError::from_status(500, r#"{"message":"boom"}"#);
    assert_eq!(err.to_string(), "request failed: 500");
}

#[test]
fn from_status_falls_back_on_malformed_body() {
    let err = ApiError::from_status(502, "<html>bad gateway</html>");
    assert_eq!(err.to_string(), "request failed: 502");
}

#[test]
fn from_status_falls_back_on_non_string_detail() {
    let err = ApiError::from_status(422, r#"{"detail":[{"loc":["body"],"msg":"invalid"}]}"#);
    assert_eq!(err.to_string(), "request failed: 422");
}

#[test]
fn is_unauthorized_only_for_status_401() {
    assert!(ApiError::from_status(401, "{}").is_unauthorized());
    assert!(!ApiError::from_status(403, "{}").is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn unavailable_is_a_network_error() {
    assert_eq!(
        ApiError::unavailable().to_string(),
        "network error: not available on server"
    );
}

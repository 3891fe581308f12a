use super::*;

#[test]
fn login_form_maps_roll_number_to_oauth_username_field() {
    let pairs = login_form("R001", "hunter2");
    assert_eq!(pairs[0], ("username", "R001".to_owned()));
    assert_eq!(pairs[1], ("password", "hunter2".to_owned()));
}

#[test]
fn register_reply_parses_acknowledgement() {
    let reply: RegisterReply =
        serde_json::from_str(r#"{"message":"Registration successful"}"#).expect("reply");
    assert_eq!(reply.message, "Registration successful");
}

use super::*;

#[test]
fn validate_login_input_trims_and_accepts() {
    assert_eq!(
        validate_login_input("  R001  ", " hunter2 "),
        Ok(("R001".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both roll number and password.")
    );
    assert_eq!(
        validate_login_input("R001", "   "),
        Err("Enter both roll number and password.")
    );
}

#[test]
fn post_login_destination_defaults_to_dashboard() {
    assert_eq!(post_login_destination(None), "/dashboard");
}

#[test]
fn post_login_destination_honors_internal_from_path() {
    assert_eq!(post_login_destination(Some("/items/7")), "/items/7");
}

#[test]
fn post_login_destination_rejects_external_targets() {
    assert_eq!(post_login_destination(Some("https://evil.example")), "/dashboard");
    assert_eq!(post_login_destination(Some("//evil.example")), "/dashboard");
}

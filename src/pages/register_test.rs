use super::*;

fn filled() -> RegistrationInput {
    RegistrationInput {
        name: "Bob".to_owned(),
        roll_number: "R007".to_owned(),
        email: "bob@campus.edu".to_owned(),
        phone: String::new(),
        branch: "CSE".to_owned(),
        school: String::new(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
    }
}

#[test]
fn valid_input_becomes_payload_with_trimmed_optionals() {
    let request = validate_registration(&filled()).expect("valid input");
    assert_eq!(request.name, "Bob");
    assert_eq!(request.roll_number, "R007");
    assert_eq!(request.email.as_deref(), Some("bob@campus.edu"));
    assert_eq!(request.phone, None);
    assert_eq!(request.school, None);
}

#[test]
fn missing_required_fields_are_rejected() {
    let mut input = filled();
    input.roll_number = "   ".to_owned();
    assert_eq!(
        validate_registration(&input),
        Err("Name, roll number and password are required.")
    );
}

#[test]
fn short_password_is_rejected() {
    let mut input = filled();
    input.password = "abc".to_owned();
    input.confirm_password = "abc".to_owned();
    assert_eq!(
        validate_registration(&input),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn mismatched_passwords_are_rejected() {
    let mut input = filled();
    input.confirm_password = "different".to_owned();
    assert_eq!(validate_registration(&input), Err("Passwords do not match."));
}

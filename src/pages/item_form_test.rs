use super::*;

#[test]
fn payload_requires_a_title() {
    assert_eq!(build_payload("   ", "", "", "lost"), Err("Title is required."));
}

#[test]
fn payload_maps_widget_values() {
    let payload = build_payload(" Blue backpack ", "2", " Left in lab ", "found")
        .expect("valid payload");
    assert_eq!(payload.title, "Blue backpack");
    assert_eq!(payload.category_id, Some(2));
    assert_eq!(payload.description.as_deref(), Some("Left in lab"));
    assert_eq!(payload.current_status.as_deref(), Some("found"));
}

#[test]
fn payload_drops_empty_optionals_and_unknown_status() {
    let payload = build_payload("Keys", "", "   ", "vanished").expect("valid payload");
    assert_eq!(payload.category_id, None);
    assert_eq!(payload.description, None);
    assert_eq!(payload.current_status, None);
}

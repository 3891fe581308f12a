use super::*;

#[test]
fn payload_requires_a_report_type() {
    assert_eq!(
        build_report_payload("", "Blue backpack", "", "", ""),
        Err("Choose whether the item was lost or found.")
    );
}

#[test]
fn payload_requires_an_item_title() {
    assert_eq!(
        build_report_payload("lost", "   ", "", "", ""),
        Err("Describe the item with a short title.")
    );
}

#[test]
fn payload_maps_widget_values() {
    let payload = build_report_payload(
        "found",
        " Blue backpack ",
        "4",
        "2026-02-01",
        " Left near the gym entrance ",
    )
    .expect("valid payload");
    assert_eq!(payload.report_type, "found");
    assert_eq!(payload.item_title.as_deref(), Some("Blue backpack"));
    assert_eq!(payload.location_id, Some(4));
    assert_eq!(payload.reported_date.as_deref(), Some("2026-02-01"));
    assert_eq!(payload.details.as_deref(), Some("Left near the gym entrance"));
    assert_eq!(payload.item_id, None);
}

#[test]
fn payload_drops_empty_optionals() {
    let payload = build_report_payload("lost", "Keys", "", "", "  ").expect("valid payload");
    assert_eq!(payload.location_id, None);
    assert_eq!(payload.reported_date, None);
    assert_eq!(payload.details, None);
}

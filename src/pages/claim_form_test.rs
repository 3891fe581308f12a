use super::*;

#[test]
fn item_param_parses_numeric_ids() {
    assert_eq!(parse_item_param(Some("42")), Some(42));
    assert_eq!(parse_item_param(Some("abc")), None);
    assert_eq!(parse_item_param(None), None);
}

#[test]
fn payload_requires_an_item() {
    assert_eq!(
        build_claim_payload(None, "It has my initials"),
        Err("No item selected. Open the item and use \"Claim This Item\".")
    );
}

#[test]
fn payload_trims_claim_text() {
    let payload = build_claim_payload(Some(3), "  It has my initials  ").expect("valid payload");
    assert_eq!(payload.item_id, 3);
    assert_eq!(payload.claim_text.as_deref(), Some("It has my initials"));
}

#[test]
fn empty_claim_text_is_omitted() {
    let payload = build_claim_payload(Some(3), "   ").expect("valid payload");
    assert_eq!(payload.claim_text, None);
}

use super::*;

#[test]
fn item_badge_class_varies_by_status() {
    assert_eq!(
        item_badge_class(Some(ItemStatus::Lost)),
        "badge badge--lost"
    );
    assert_eq!(
        item_badge_class(Some(ItemStatus::Found)),
        "badge badge--found"
    );
    assert_eq!(item_badge_class(None), "badge");
}

#[test]
fn claim_badge_class_varies_by_status() {
    assert_eq!(
        claim_badge_class(Some(ClaimStatus::Pending)),
        "badge badge--pending"
    );
    assert_eq!(claim_badge_class(None), "badge");
}

#[test]
fn report_badge_class_varies_by_status() {
    assert_eq!(
        report_badge_class(Some(ReportStatus::InReview)),
        "badge badge--in-review"
    );
    assert_eq!(report_badge_class(None), "badge");
}

#[test]
fn label_falls_back_to_raw_then_unknown() {
    assert_eq!(label_or_raw(Some("Lost"), Some("lost")), "Lost");
    assert_eq!(label_or_raw(None, Some("mystery")), "mystery");
    assert_eq!(label_or_raw(None, None), "Unknown");
}

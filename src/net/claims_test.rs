use super::*;

#[test]
fn claim_path_formats_expected_path() {
    assert_eq!(claim_path(11), "/claims/11");
}

#[test]
fn list_path_without_filter_has_no_query() {
    assert_eq!(list_path(None), "/claims/");
}

#[test]
fn list_path_with_filter_appends_status() {
    assert_eq!(
        list_path(Some(ClaimStatus::Pending)),
        "/claims/?status=pending"
    );
}

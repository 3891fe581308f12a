use super::*;

#[test]
fn empty_widgets_build_an_unfiltered_query() {
    assert_eq!(build_query("", "", ""), ItemQuery::default());
    assert_eq!(build_query("", "", "   "), ItemQuery::default());
}

#[test]
fn widget_values_map_onto_query_fields() {
    let query = build_query("found", "3", "  blue backpack ");
    assert_eq!(query.status, Some(ItemStatus::Found));
    assert_eq!(query.category_id, Some(3));
    assert_eq!(query.search.as_deref(), Some("blue backpack"));
}

#[test]
fn unknown_status_and_category_are_dropped() {
    let query = build_query("eaten", "all", "keys");
    assert_eq!(query.status, None);
    assert_eq!(query.category_id, None);
    assert_eq!(query.search.as_deref(), Some("keys"));
}

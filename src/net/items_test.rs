use super::*;

#[test]
fn item_path_formats_expected_path() {
    assert_eq!(item_path(42), "/items/42");
}

#[test]
fn empty_query_produces_no_pairs() {
    assert!(ItemQuery::default().to_pairs().is_empty());
}

#[test]
fn full_query_produces_all_pairs_in_order() {
    let query = ItemQuery {
        status: Some(ItemStatus::Lost),
        category_id: Some(2),
        search: Some("backpack".to_owned()),
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("status", "lost".to_owned()),
            ("category_id", "2".to_owned()),
            ("search", "backpack".to_owned()),
        ]
    );
}

#[test]
fn partial_query_omits_unset_filters() {
    let query = ItemQuery {
        search: Some("keys".to_owned()),
        ..ItemQuery::default()
    };
    assert_eq!(query.to_pairs(), vec![("search", "keys".to_owned())]);
}

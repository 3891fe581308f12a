use super::*;

fn item_with_status(status: Option<&str>) -> Item {
    serde_json::from_value(serde_json::json!({
        "item_id": 1,
        "title": "Thing",
        "current_status": status,
    }))
    .expect("test item")
}

#[test]
fn summarize_counts_by_status() {
    let list = vec![
        item_with_status(Some("lost")),
        item_with_status(Some("lost")),
        item_with_status(Some("found")),
        item_with_status(Some("claimed")),
    ];
    assert_eq!(
        summarize(&list),
        ItemCounts {
            lost: 2,
            found: 1,
            claimed: 1,
        }
    );
}

#[test]
fn summarize_ignores_terminal_and_unknown_statuses() {
    let list = vec![
        item_with_status(Some("completed")),
        item_with_status(Some("discarded")),
        item_with_status(Some("mystery")),
        item_with_status(None),
    ];
    assert_eq!(summarize(&list), ItemCounts::default());
}

#[test]
fn summarize_of_empty_list_is_zero() {
    assert_eq!(summarize(&[]), ItemCounts::default());
}

use super::*;

#[test]
fn empty_widgets_build_an_unfiltered_query() {
    assert_eq!(build_report_query("", ""), ReportQuery::default());
}

#[test]
fn widget_values_map_onto_query_fields() {
    let query = build_report_query("found", "open");
    assert_eq!(query.report_type, Some(ReportType::Found));
    assert_eq!(query.status, Some(ReportStatus::Open));
}

#[test]
fn unknown_values_are_dropped() {
    assert_eq!(build_report_query("stolen", "pending"), ReportQuery::default());
}

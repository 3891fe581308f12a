use super::*;

#[test]
fn status_path_carries_status_as_query() {
    assert_eq!(
        status_path(5, ReportStatus::InReview),
        "/reports/5/status?status=in_review"
    );
}

#[test]
fn report_query_includes_only_set_filters() {
    let query = ReportQuery {
        report_type: Some(ReportType::Found),
        status: None,
    };
    assert_eq!(query.to_pairs(), vec![("report_type", "found".to_owned())]);
}

#[test]
fn report_query_combines_both_filters() {
    let query = ReportQuery {
        report_type: Some(ReportType::Lost),
        status: Some(ReportStatus::Open),
    };
    assert_eq!(
        query.to_pairs(),
        vec![
            ("report_type", "lost".to_owned()),
            ("status", "open".to_owned()),
        ]
    );
}

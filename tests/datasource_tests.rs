// Boundary tests: argument validation and result page building

use fibernode_utilization::datasource::{
    ColumnKind, UtilizationQuery, build_page, parse_args,
};
use fibernode_utilization::models::{FiberNodeOverview, NO_DATA};

fn query(fe: &str, column_pid: &str, entity_table_pid: &str) -> UtilizationQuery {
    UtilizationQuery {
        fe_element: fe.to_string(),
        column_pid: column_pid.to_string(),
        entity_table_pid: entity_table_pid.to_string(),
    }
}

#[test]
fn parse_args_accepts_numeric_identifiers() {
    let args = parse_args(&query("10/200", "31", "2000")).expect("valid args");
    assert_eq!(args.front_end_element, "10/200");
    assert_eq!(args.column_pid, 31);
    assert_eq!(args.entity_table_pid, 2000);
}

#[test]
fn parse_args_accepts_empty_front_end_element() {
    // An empty element is a valid argument set; the run itself yields
    // an empty result.
    let args = parse_args(&query("", "31", "2000")).expect("valid args");
    assert_eq!(args.front_end_element, "");
}

#[test]
fn parse_args_rejects_missing_or_non_numeric_identifiers() {
    assert!(parse_args(&query("10/200", "", "2000")).is_none());
    assert!(parse_args(&query("10/200", "31", "")).is_none());
    assert!(parse_args(&query("10/200", "thirty", "2000")).is_none());
    assert!(parse_args(&query("10/200", "31", "-5")).is_none());
}

#[test]
fn page_has_fixed_schema_and_single_page_marker() {
    let page = build_page(vec![]);
    assert!(!page.has_next_page);
    assert_eq!(page.rows.len(), 0);
    let names: Vec<&str> = page.columns.iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["ID", "Fiber Node", "Peak Utilization"]);
    assert_eq!(page.columns[2].kind, ColumnKind::Double);
}

#[test]
fn page_rows_keep_raw_value_and_formatted_display() {
    let page = build_page(vec![FiberNodeOverview {
        key: "A".to_string(),
        fiber_node_name: "nameA".to_string(),
        peak_utilization: 40.0,
    }]);

    assert_eq!(page.rows.len(), 1);
    let cells = &page.rows[0].cells;
    assert_eq!(cells[0].value, serde_json::json!("A"));
    assert_eq!(cells[1].value, serde_json::json!("nameA"));
    assert_eq!(cells[2].value, serde_json::json!(40.0));
    assert_eq!(cells[2].display_value.as_deref(), Some("40.00 %"));
}

#[test]
fn page_shows_not_available_for_sentinel_rows() {
    let page = build_page(vec![FiberNodeOverview {
        key: "B".to_string(),
        fiber_node_name: "nameB".to_string(),
        peak_utilization: NO_DATA,
    }]);

    let cells = &page.rows[0].cells;
    assert_eq!(cells[2].value, serde_json::json!(-1.0));
    assert_eq!(cells[2].display_value.as_deref(), Some("N/A"));
}

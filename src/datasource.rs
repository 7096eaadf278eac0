// Datasource boundary: query-argument validation and the single-page
// tabular output consumed by the query engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregation::QueryArgs;
use crate::aggregation::peak::format_percent;
use crate::models::FiberNodeOverview;

/// Raw query parameters of the utilization endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UtilizationQuery {
    #[serde(default)]
    pub fe_element: String,
    #[serde(default)]
    pub column_pid: String,
    #[serde(default)]
    pub entity_table_pid: String,
}

/// Validates raw arguments. A missing or non-numeric identifier is None;
/// the caller answers with an empty page rather than an error. An empty
/// front-end element is accepted here and yields an empty run.
pub fn parse_args(query: &UtilizationQuery) -> Option<QueryArgs> {
    let column_pid = query.column_pid.trim().parse().ok()?;
    let entity_table_pid = query.entity_table_pid.trim().parse().ok()?;
    Some(QueryArgs {
        front_end_element: query.fe_element.trim().to_string(),
        column_pid,
        entity_table_pid,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKind {
    String,
    Double,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// The full materialized result; there is never a second page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub has_next_page: bool,
}

fn columns() -> Vec<Column> {
    vec![
        Column {
            name: "ID",
            kind: ColumnKind::String,
        },
        Column {
            name: "Fiber Node",
            kind: ColumnKind::String,
        },
        Column {
            name: "Peak Utilization",
            kind: ColumnKind::Double,
        },
    ]
}

impl ResultPage {
    pub fn empty() -> Self {
        Self {
            columns: columns(),
            rows: Vec::new(),
            has_next_page: false,
        }
    }
}

/// One row per overview: raw peak value kept numeric for consumer-side
/// sorting, display string formatted ("N/A" for the no-data sentinel).
pub fn build_page(overviews: Vec<FiberNodeOverview>) -> ResultPage {
    let rows = overviews
        .into_iter()
        .map(|overview| Row {
            cells: vec![
                Cell {
                    value: Value::String(overview.key),
                    display_value: None,
                },
                Cell {
                    value: Value::String(overview.fiber_node_name),
                    display_value: None,
                },
                Cell {
                    value: serde_json::json!(overview.peak_utilization),
                    display_value: Some(format_percent(overview.peak_utilization)),
                },
            ],
        })
        .collect();

    ResultPage {
        columns: columns(),
        rows,
        has_next_page: false,
    }
}

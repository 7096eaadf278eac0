// Columnar partial-table snapshot as returned by the gateway

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display state of one table cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellDisplayState {
    #[default]
    Normal,
    Exception,
    NotInitialized,
}

/// One cell: opaque scalar value plus optional display decoration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub value: Value,
    #[serde(default)]
    pub display_value: Option<String>,
    #[serde(default)]
    pub display_state: CellDisplayState,
}

impl TableCell {
    pub fn from_value(value: Value) -> Self {
        Self {
            value,
            display_value: None,
            display_state: CellDisplayState::Normal,
        }
    }

    /// Cell value as text: strings verbatim, numbers/bools formatted, anything else empty.
    pub fn text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }
}

/// Column-major table snapshot. Columns may be ragged if the remote
/// response is malformed; `column` never panics on a missing index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTable {
    pub columns: Vec<Vec<TableCell>>,
}

impl PartialTable {
    pub fn new(columns: Vec<Vec<TableCell>>) -> Self {
        Self { columns }
    }

    /// True when there is no data at all: no columns, or an empty key column.
    pub fn is_empty(&self) -> bool {
        self.columns.first().is_none_or(|c| c.is_empty())
    }

    /// Column by index; a missing column reads as empty.
    pub fn column(&self, index: usize) -> &[TableCell] {
        self.columns.get(index).map_or(&[], |c| c.as_slice())
    }
}

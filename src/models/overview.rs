// Per-run aggregation output: one overview per discovered fiber node

use serde::{Deserialize, Serialize};

/// Sentinel utilization for "no trend data".
pub const NO_DATA: f64 = -1.0;

/// One fiber node's aggregated view for a single run. Keyed by the
/// entity-local key; immutable once inserted into the run's result map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiberNodeOverview {
    pub key: String,
    pub fiber_node_name: String,
    pub peak_utilization: f64,
}

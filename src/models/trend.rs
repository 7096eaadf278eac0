// Trend request/response models: parameter keys, samples, run window

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One trended parameter instance on a remote element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterKey {
    pub parameter_id: u32,
    pub index: String,
}

/// Averaging bucket width for trend retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendInterval {
    FiveMin,
    Hour,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendingType {
    Average,
    Minimum,
    Maximum,
}

/// One time bucket. `average` is absent when the bucket holds no data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSample {
    pub timestamp: i64,
    #[serde(default)]
    pub average: Option<f64>,
}

/// Series keyed by composite series key ("<element>/<entity key>").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub records: HashMap<String, Vec<TrendSample>>,
}

/// Time window of one aggregation run: end = run start, start = end - 24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl TrendWindow {
    pub const LOOKBACK_MS: i64 = 24 * 60 * 60 * 1000;

    pub fn ending_at(end_ms: i64) -> Self {
        Self {
            start_ms: end_ms - Self::LOOKBACK_MS,
            end_ms,
        }
    }

    pub fn ending_now() -> Self {
        Self::ending_at(chrono::Utc::now().timestamp_millis())
    }
}

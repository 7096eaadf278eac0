// Shared test helpers: scripted remote client + table/trend builders

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use fibernode_utilization::models::{PartialTable, TableCell, TrendResponse, TrendSample};
use fibernode_utilization::remote::{RemoteClient, TableRequest, TrendRequest};

/// Scripted RemoteClient. Tables are keyed by (element address, table id);
/// trend responses are queued per element and consumed one call at a time,
/// so a second run observes a drained queue unless it was scripted too.
#[derive(Default)]
pub struct MockRemoteClient {
    tables: HashMap<(String, u32), PartialTable>,
    trends: Mutex<HashMap<String, VecDeque<Option<TrendResponse>>>>,
    pub table_requests: Mutex<Vec<TableRequest>>,
    pub trend_requests: Mutex<Vec<TrendRequest>>,
}

impl MockRemoteClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, element: &str, table_id: u32, table: PartialTable) -> Self {
        self.tables.insert((element.to_string(), table_id), table);
        self
    }

    pub fn with_trends(mut self, element: &str, response: Option<TrendResponse>) -> Self {
        self.trends
            .get_mut()
            .unwrap()
            .entry(element.to_string())
            .or_default()
            .push_back(response);
        self
    }
}

#[async_trait]
impl RemoteClient for MockRemoteClient {
    async fn get_partial_table(
        &self,
        request: &TableRequest,
    ) -> anyhow::Result<Option<PartialTable>> {
        self.table_requests.lock().unwrap().push(request.clone());
        let key = (request.address.to_string(), request.table_id);
        Ok(self.tables.get(&key).cloned())
    }

    async fn get_trend_data(
        &self,
        request: &TrendRequest,
    ) -> anyhow::Result<Option<TrendResponse>> {
        self.trend_requests.lock().unwrap().push(request.clone());
        let mut trends = self.trends.lock().unwrap();
        Ok(trends
            .get_mut(&request.address.to_string())
            .and_then(|queue| queue.pop_front())
            .flatten())
    }
}

pub fn str_cell(value: &str) -> TableCell {
    TableCell::from_value(serde_json::json!(value))
}

pub fn column(values: &[&str]) -> Vec<TableCell> {
    values.iter().map(|v| str_cell(v)).collect()
}

pub fn table(columns: Vec<Vec<TableCell>>) -> PartialTable {
    PartialTable::new(columns)
}

/// Samples at 5-minute spacing with the given bucket averages.
pub fn samples(values: &[Option<f64>]) -> Vec<TrendSample> {
    values
        .iter()
        .enumerate()
        .map(|(i, average)| TrendSample {
            timestamp: (i as i64) * 300_000,
            average: *average,
        })
        .collect()
}

pub fn trend_response(entries: Vec<(&str, Vec<TrendSample>)>) -> TrendResponse {
    TrendResponse {
        records: entries
            .into_iter()
            .map(|(key, series)| (key.to_string(), series))
            .collect(),
    }
}

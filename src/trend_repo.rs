// Trend-data fetches via the remote client (fixed 5-min average buckets)

use std::sync::Arc;

use tracing::debug;

use crate::models::{ParameterKey, TrendInterval, TrendResponse, TrendWindow, TrendingType};
use crate::remote::{ElementAddress, RemoteClient, TrendRequest};

pub struct TrendRepo {
    client: Arc<dyn RemoteClient>,
}

impl TrendRepo {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }

    /// Fetches trend series for one batch of parameter keys over the run
    /// window. Cached aggregates are allowed and series are retrieved by
    /// primary key. An unaddressable element or a "no data" response is
    /// `None`; only transport failures propagate.
    pub async fn get_trends(
        &self,
        element: &str,
        parameters: Vec<ParameterKey>,
        window: &TrendWindow,
    ) -> anyhow::Result<Option<TrendResponse>> {
        let Some(address) = ElementAddress::parse(element) else {
            debug!(element, "element address not parseable; no trend data");
            return Ok(None);
        };

        let request = TrendRequest {
            address,
            parameters,
            start_ms: window.start_ms,
            end_ms: window.end_ms,
            interval: TrendInterval::FiveMin,
            trending: TrendingType::Average,
            skip_cache: false,
            with_primary_key: true,
        };
        self.client.get_trend_data(&request).await
    }
}

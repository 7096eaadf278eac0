// JSON HTTP gateway implementation of RemoteClient

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{RemoteClient, TableRequest, TrendRequest};
use crate::config::GatewayConfig;
use crate::models::{PartialTable, TrendResponse};

pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn connect(config: &GatewayConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> anyhow::Result<Option<Resp>>
    where
        Req: serde::Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        // The gateway encodes "no data" as a JSON null body.
        let body: Option<Resp> = response.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl RemoteClient for GatewayClient {
    async fn get_partial_table(
        &self,
        request: &TableRequest,
    ) -> anyhow::Result<Option<PartialTable>> {
        let table = self
            .post_json::<_, PartialTable>("/api/v1/elements/table", request)
            .await?;
        debug!(
            address = %request.address,
            table_id = request.table_id,
            columns = table.as_ref().map_or(0, |t| t.columns.len()),
            "partial table fetched"
        );
        Ok(table)
    }

    async fn get_trend_data(
        &self,
        request: &TrendRequest,
    ) -> anyhow::Result<Option<TrendResponse>> {
        let trends = self
            .post_json::<_, TrendResponse>("/api/v1/elements/trend", request)
            .await?;
        debug!(
            address = %request.address,
            parameters = request.parameters.len(),
            records = trends.as_ref().map_or(0, |t| t.records.len()),
            "trend data fetched"
        );
        Ok(trends)
    }
}

// Remote element-management collaborator: request contract + address parsing

pub mod gateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{ParameterKey, PartialTable, TrendInterval, TrendResponse, TrendingType};

/// Coarse "system/element" address of a remote element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAddress {
    pub system_id: u32,
    pub element_id: u32,
}

impl ElementAddress {
    /// Parses "<system>/<element>". Anything else (missing delimiter,
    /// non-numeric or negative components) is None; callers treat an
    /// unaddressable element as "no data", not as an error.
    pub fn parse(element: &str) -> Option<Self> {
        let mut parts = element.splitn(3, '/');
        let system_id = parts.next()?.trim().parse().ok()?;
        let element_id = parts.next()?.trim().parse().ok()?;
        Some(Self {
            system_id,
            element_id,
        })
    }
}

impl std::fmt::Display for ElementAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.system_id, self.element_id)
    }
}

/// Partial/filtered table snapshot request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequest {
    pub address: ElementAddress,
    pub table_id: u32,
    pub filters: Vec<String>,
}

/// Time-bounded trend request for a batch of parameter keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRequest {
    pub address: ElementAddress,
    pub parameters: Vec<ParameterKey>,
    pub start_ms: i64,
    pub end_ms: i64,
    pub interval: TrendInterval,
    pub trending: TrendingType,
    pub skip_cache: bool,
    pub with_primary_key: bool,
}

/// The two remote primitives the pipeline depends on. Either call may
/// yield no data (`Ok(None)`); transport failures are `Err`.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn get_partial_table(&self, request: &TableRequest)
    -> anyhow::Result<Option<PartialTable>>;

    async fn get_trend_data(&self, request: &TrendRequest)
    -> anyhow::Result<Option<TrendResponse>>;
}

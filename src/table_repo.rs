// Partial-table fetches via the remote client

use std::sync::Arc;

use tracing::debug;

use crate::models::PartialTable;
use crate::remote::{ElementAddress, RemoteClient, TableRequest};

pub struct TableRepo {
    client: Arc<dyn RemoteClient>,
}

impl TableRepo {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self { client }
    }

    /// Fetches a filtered table snapshot. An unaddressable element or a
    /// "no data" gateway response reads as an empty table; only transport
    /// failures propagate.
    pub async fn get_table(
        &self,
        element: &str,
        table_id: u32,
        filters: Vec<String>,
    ) -> anyhow::Result<PartialTable> {
        let Some(address) = ElementAddress::parse(element) else {
            debug!(element, "element address not parseable; empty table");
            return Ok(PartialTable::default());
        };

        let request = TableRequest {
            address,
            table_id,
            filters,
        };
        let table = self.client.get_partial_table(&request).await?;
        Ok(table.unwrap_or_default())
    }
}

// Discovery + aggregation pipeline: service-group table -> entity
// sub-tables -> partitioned trend fetches -> peak utilization per node.

pub mod partition;
pub mod peak;

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::try_join_all;
use tokio::sync::Mutex;
use tracing::warn;

use crate::models::{
    FiberNodeOverview, ParameterKey, PartialTable, TableCell, TrendWindow,
};
use crate::remote::RemoteClient;
use crate::table_repo::TableRepo;
use crate::trend_repo::TrendRepo;
use self::partition::{TREND_BATCH_SIZE, partition_keys};
use self::peak::reduce_to_peak;

/// Top-level table listing the service groups behind a front-end element.
const SERVICE_GROUP_TABLE_ID: u32 = 1_200_500;

/// Validated inputs for one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    pub front_end_element: String,
    pub column_pid: u32,
    pub entity_table_pid: u32,
}

/// Everything one run needs, built at run start and passed through the
/// pipeline; the engine itself keeps no per-run state.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub args: QueryArgs,
    pub window: TrendWindow,
}

impl RunContext {
    pub fn new(args: QueryArgs) -> Self {
        Self {
            window: TrendWindow::ending_now(),
            args,
        }
    }

    /// Run context with a fixed end time (tests).
    pub fn at(args: QueryArgs, end_ms: i64) -> Self {
        Self {
            window: TrendWindow::ending_at(end_ms),
            args,
        }
    }
}

/// Why a run was aborted. Consumers only ever see an empty row set; the
/// classification exists for logs.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("entity table {table_id} on {element} returned no rows")]
    EmptyEntityTable { element: String, table_id: u32 },
    #[error("trend request for {element} returned no records")]
    EmptyTrendResponse { element: String },
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

type ResultMap = Mutex<HashMap<String, FiberNodeOverview>>;

pub struct AggregationEngine {
    table_repo: TableRepo,
    trend_repo: TrendRepo,
}

impl AggregationEngine {
    pub fn new(client: Arc<dyn RemoteClient>) -> Self {
        Self {
            table_repo: TableRepo::new(client.clone()),
            trend_repo: TrendRepo::new(client),
        }
    }

    /// Runs the pipeline once. Any abort (empty backend table, empty
    /// trend response, transport failure) discards all partial results
    /// and yields an empty row set; rows are sorted by entity key.
    pub async fn collect(&self, ctx: &RunContext) -> Vec<FiberNodeOverview> {
        match self.run(ctx).await {
            Ok(results) => {
                let mut rows: Vec<FiberNodeOverview> = results.into_values().collect();
                rows.sort_by(|a, b| a.key.cmp(&b.key));
                rows
            }
            Err(e) => {
                warn!(error = %e, "aggregation run aborted; returning empty result");
                Vec::new()
            }
        }
    }

    async fn run(
        &self,
        ctx: &RunContext,
    ) -> Result<HashMap<String, FiberNodeOverview>, AggregationError> {
        let results: ResultMap = Mutex::new(HashMap::new());

        if ctx.args.front_end_element.is_empty() {
            return Ok(results.into_inner());
        }

        let service_groups = self
            .table_repo
            .get_table(
                &ctx.args.front_end_element,
                SERVICE_GROUP_TABLE_ID,
                vec!["forceFullTable=true".to_string()],
            )
            .await?;

        for cell in service_groups.column(0) {
            let element = cell.text();
            self.collect_entity(ctx, &element, &results).await?;
        }

        Ok(results.into_inner())
    }

    /// Resolves one service-group entity: fetch its sub-table, partition
    /// the entity keys, trend every partition. An empty sub-table aborts
    /// the whole run.
    async fn collect_entity(
        &self,
        ctx: &RunContext,
        element: &str,
        results: &ResultMap,
    ) -> Result<(), AggregationError> {
        let table_id = ctx.args.entity_table_pid;
        let filter = format!(
            "forceFullTable=true;columns={},{};trend=avg,{}",
            table_id + 1,
            table_id + 2,
            ctx.args.column_pid
        );
        let entity_table = self
            .table_repo
            .get_table(element, table_id, vec![filter])
            .await?;
        if entity_table.is_empty() {
            return Err(AggregationError::EmptyEntityTable {
                element: element.to_string(),
                table_id,
            });
        }

        let entity_keys: Vec<String> = entity_table
            .column(0)
            .iter()
            .map(TableCell::text)
            .collect();
        let parameter_keys: Vec<ParameterKey> = entity_keys
            .iter()
            .map(|index| ParameterKey {
                parameter_id: ctx.args.column_pid,
                index: index.clone(),
            })
            .collect();

        let partitions = partition_keys(&parameter_keys, TREND_BATCH_SIZE);
        try_join_all(partitions.into_iter().map(|batch| {
            self.collect_partition(ctx, element, batch, &entity_keys, &entity_table, results)
        }))
        .await?;

        Ok(())
    }

    /// Trends one partition and folds the returned series into the run's
    /// result map. An empty trend response aborts the whole run; a series
    /// that cannot be correlated back to a named entity is skipped.
    async fn collect_partition(
        &self,
        ctx: &RunContext,
        element: &str,
        batch: Vec<ParameterKey>,
        entity_keys: &[String],
        entity_table: &PartialTable,
        results: &ResultMap,
    ) -> Result<(), AggregationError> {
        let response = self
            .trend_repo
            .get_trends(element, batch, &ctx.window)
            .await?;
        let response = match response {
            Some(r) if !r.records.is_empty() => r,
            _ => {
                return Err(AggregationError::EmptyTrendResponse {
                    element: element.to_string(),
                });
            }
        };

        let name_column = entity_table.column(2);
        for (series_key, samples) in &response.records {
            // Entity-local key: composite key minus everything up to and
            // including the first delimiter.
            let key = series_key
                .split_once('/')
                .map_or(series_key.as_str(), |(_, rest)| rest);

            let Some(position) = entity_keys.iter().position(|k| k == key) else {
                continue;
            };
            let name = name_column
                .get(position)
                .map(TableCell::text)
                .unwrap_or_default();
            if name.is_empty() {
                continue;
            }

            let overview = FiberNodeOverview {
                key: key.to_string(),
                fiber_node_name: name,
                peak_utilization: reduce_to_peak(samples),
            };
            results.lock().await.insert(overview.key.clone(), overview);
        }

        Ok(())
    }
}

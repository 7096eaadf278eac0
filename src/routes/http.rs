// GET handlers: version, fiber node utilization page

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};

use super::AppState;
use crate::aggregation::RunContext;
use crate::datasource::{ResultPage, UtilizationQuery, build_page, parse_args};
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/fibernodes/utilization — runs one aggregation pass and
/// returns the full result as a single page. Invalid arguments and any
/// aborted run both answer with an empty page, never an error status.
pub(super) async fn utilization_handler(
    State(state): State<AppState>,
    Query(query): Query<UtilizationQuery>,
) -> impl IntoResponse {
    let Some(args) = parse_args(&query) else {
        tracing::debug!(operation = "parse_args", "invalid query arguments; empty page");
        return axum::Json(ResultPage::empty());
    };

    let ctx = RunContext::new(args);
    let overviews = state.engine.collect(&ctx).await;
    axum::Json(build_page(overviews))
}

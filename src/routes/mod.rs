// HTTP routes

mod http;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::aggregation::AggregationEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) engine: Arc<AggregationEngine>,
}

pub fn app(engine: Arc<AggregationEngine>) -> Router {
    let state = AppState { engine };
    Router::new()
        .route("/", get(|| async { "Fiber node utilization datasource" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route(
            "/api/fibernodes/utilization",
            get(http::utilization_handler),
        ) // GET /api/fibernodes/utilization
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

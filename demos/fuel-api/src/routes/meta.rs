use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::metrics::MetricsSnapshot;
use crate::state::AppState;

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Fuel monitor API" }))
}

/// GET /health
///
/// Liveness probe. Also reports which dataset the service answers from.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({ "status": "ok", "source": state.source }))
}

/// GET /metrics
///
/// Total requests, per-endpoint count and average time, and status code
/// counts since start-up or the last reset.
pub async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

/// POST /metrics/reset
pub async fn reset_metrics(State(state): State<Arc<AppState>>) -> Json<Value> {
    state.metrics.reset();
    Json(json!({ "status": "metrics reset" }))
}

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::metrics::track_metrics;
use crate::routes;
use crate::state::AppState;

/// Build the service router: every route, the metrics middleware and CORS.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::meta::root))
        .route("/health", get(routes::meta::health))
        .route("/metrics", get(routes::meta::metrics))
        .route("/metrics/reset", post(routes::meta::reset_metrics))
        .route("/collections", get(routes::collections::list_collections))
        .route("/kpis/avg-price-by-fuel", get(routes::kpis::avg_price_by_fuel))
        .route("/kpis/volume-by-vehicle", get(routes::kpis::volume_by_vehicle))
        .route("/reports/drivers", get(routes::reports::driver_report))
        .layer(middleware::from_fn_with_state(state.clone(), track_metrics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

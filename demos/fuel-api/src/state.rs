use fuel_monitor_sdk::AsyncFuelMonitorSdk;

use crate::metrics::Metrics;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// SDK running the local engine. Blocking work is dispatched to a
    /// thread pool internally.
    pub sdk: AsyncFuelMonitorSdk,

    /// Human-readable description of the backing dataset, for `/health`.
    pub source: String,

    /// Request counts and timings collected by the metrics middleware.
    pub metrics: Metrics,
}

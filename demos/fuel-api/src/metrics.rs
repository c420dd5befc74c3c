//! In-memory request metrics and the middleware that records them.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use serde::Serialize;

use crate::state::AppState;

/// Response header carrying the handler time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Requests slower than this are logged at warn level.
const SLOW_REQUEST: Duration = Duration::from_secs(1);

/// Path of the snapshot endpoint. Reading metrics is not itself recorded.
const METRICS_PATH: &str = "/metrics";

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Count and timing for one `METHOD /path` pair. Times are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EndpointStats {
    pub count: u64,
    pub total_time: f64,
    pub avg_time: f64,
}

/// Everything `/metrics` reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    pub endpoints: BTreeMap<String, EndpointStats>,
    pub status_codes: BTreeMap<u16, u64>,
}

/// Process-wide request metrics, shared through [`AppState`].
#[derive(Debug, Default)]
pub struct Metrics {
    inner: Mutex<MetricsSnapshot>,
}

impl Metrics {
    pub fn record(&self, endpoint: &str, status: u16, elapsed: Duration) {
        let secs = elapsed.as_secs_f64();
        let mut inner = self.lock();

        let stats = inner.endpoints.entry(endpoint.to_string()).or_default();
        stats.count += 1;
        stats.total_time += secs;
        stats.avg_time = stats.total_time / stats.count as f64;

        *inner.status_codes.entry(status).or_default() += 1;
        inner.total_requests += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.lock().clone()
    }

    pub fn reset(&self) {
        *self.lock() = MetricsSnapshot::default();
    }

    // A panic while holding the lock leaves counters that are still usable.
    fn lock(&self) -> MutexGuard<'_, MetricsSnapshot> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

/// Time every request, record it, and tag the response with
/// `X-Process-Time`.
pub async fn track_metrics(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if path == METRICS_PATH {
        return next.run(request).await;
    }
    let method = request.method().clone();

    let start = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    state
        .metrics
        .record(&format!("{method} {path}"), status, elapsed);

    if let Ok(value) = HeaderValue::from_str(&format!("{:.4}", elapsed.as_secs_f64())) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }

    if elapsed > SLOW_REQUEST {
        tracing::warn!(
            %method,
            %path,
            elapsed_secs = elapsed.as_secs_f64(),
            status,
            "slow request"
        );
    }

    response
}

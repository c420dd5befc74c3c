mod app;
mod error;
mod metrics;
mod routes;
mod state;

use std::env;
use std::sync::Arc;

use fuel_monitor_sdk::{AsyncFuelMonitorSdk, Dataset};
use tracing_subscriber::EnvFilter;

use metrics::Metrics;
use state::AppState;

/// Path to a JSON (or `.json.gz`) dataset. Defaults to the reference records.
const DATASET_ENV: &str = "FUEL_MONITOR_DATASET";
/// Number of synthetic records to serve instead of a file.
const GENERATE_ENV: &str = "FUEL_MONITOR_GENERATE";
const BIND_ENV: &str = "FUEL_MONITOR_BIND";
const DEFAULT_BIND: &str = "0.0.0.0:8000";

fn load_dataset() -> fuel_monitor_sdk::Result<Dataset> {
    if let Ok(path) = env::var(DATASET_ENV) {
        return Dataset::load_json(path);
    }
    if let Some(count) = env::var(GENERATE_ENV).ok().and_then(|v| v.parse().ok()) {
        return Ok(Dataset::generate(count, 42));
    }
    Dataset::reference()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dataset = load_dataset()?;
    let source = format!("local({} records)", dataset.len());
    let sdk = AsyncFuelMonitorSdk::builder()
        .local()
        .dataset(dataset)
        .build()
        .await?;
    tracing::info!(%source, "SDK ready");

    let state = Arc::new(AppState {
        sdk,
        source,
        metrics: Metrics::default(),
    });
    let app = app::router(state);

    let addr = env::var(BIND_ENV).unwrap_or_else(|_| DEFAULT_BIND.to_string());
    tracing::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

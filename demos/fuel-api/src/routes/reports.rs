use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use fuel_monitor_sdk::DriverReport;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DriverReportParams {
    pub search: Option<String>,
}

/// GET /reports/drivers?search=123.456
///
/// Consumption report for the driver whose CPF or name matches `search`.
/// Responds 404 when nothing matches.
pub async fn driver_report(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DriverReportParams>, QueryRejection>,
) -> Result<Json<DriverReport>, AppError> {
    let Query(params) = query?;
    let search = params
        .search
        .ok_or_else(|| AppError::bad_request("Missing required query parameter: search"))?;

    Ok(Json(state.sdk.driver_report(search).await?))
}

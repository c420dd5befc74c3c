use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use fuel_monitor_sdk::{AvgPriceByFuel, VolumeByVehicle};

use crate::error::AppError;
use crate::state::AppState;

/// GET /kpis/avg-price-by-fuel
pub async fn avg_price_by_fuel(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AvgPriceByFuel>>, AppError> {
    Ok(Json(state.sdk.avg_price_by_fuel().await?))
}

/// GET /kpis/volume-by-vehicle
pub async fn volume_by_vehicle(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VolumeByVehicle>>, AppError> {
    Ok(Json(state.sdk.volume_by_vehicle().await?))
}

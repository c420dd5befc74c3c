use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use fuel_monitor_sdk::config::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use fuel_monitor_sdk::{CollectionFilters, CollectionsPage};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListCollectionsParams {
    pub fuel_type: Option<String>,
    pub vehicle_type: Option<String>,
    pub city: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// GET /collections?fuel_type=Diesel+S10&city=paulo&page=2&page_size=5
///
/// Paginated refueling records. `page` must be at least 1 and `page_size`
/// between 1 and 100.
pub async fn list_collections(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListCollectionsParams>, QueryRejection>,
) -> Result<Json<CollectionsPage>, AppError> {
    let Query(params) = query?;
    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page < 1 {
        return Err(AppError::bad_request("page must be at least 1"));
    }
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(AppError::bad_request(format!(
            "page_size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }

    let filters = CollectionFilters {
        fuel_type: params.fuel_type,
        vehicle_type: params.vehicle_type,
        city: params.city,
    };
    let result = state
        .sdk
        .collections(filters, Some(page), Some(page_size))
        .await?;

    Ok(Json(result))
}

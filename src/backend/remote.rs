//! HTTP backend for a service implementing the fuel monitor API.
//!
//! One GET per call, no retries and no caching. A 404 from the driver report
//! endpoint means "no driver matched"; any other non-success status is a
//! service failure.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::backend::FuelBackend;
use crate::config;
use crate::error::{FuelMonitorError, Result};
use crate::models::{AvgPriceByFuel, CollectionFilters, CollectionsPage, DriverReport, VolumeByVehicle};

/// Queries a remote fuel monitor service over HTTP.
pub struct RemoteBackend {
    base_url: String,
    client: Client,
}

impl RemoteBackend {
    /// Create a backend targeting `base_url` (e.g. `http://localhost:8000`).
    ///
    /// A trailing `/` is ignored. `timeout` bounds each whole request.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, params = query.len(), "GET");
        let resp = self.client.get(&url).query(query).send()?;
        Ok(resp)
    }

    /// Fail on any non-success status, then parse the body.
    fn parse<T: DeserializeOwned>(resp: Response, path: &str) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), endpoint = path, "fuel monitor service error");
            return Err(FuelMonitorError::Service {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }
        Ok(resp.json()?)
    }
}

impl FuelBackend for RemoteBackend {
    fn collections(
        &self,
        filters: &CollectionFilters,
        page: usize,
        page_size: usize,
    ) -> Result<CollectionsPage> {
        let mut query = vec![("page", page.to_string()), ("page_size", page_size.to_string())];
        if let Some(fuel_type) = filters.fuel_type() {
            query.push(("fuel_type", fuel_type.to_string()));
        }
        if let Some(city) = filters.city() {
            query.push(("city", city.to_string()));
        }
        if let Some(vehicle_type) = filters.vehicle_type() {
            query.push(("vehicle_type", vehicle_type.to_string()));
        }

        let resp = self.send(config::COLLECTIONS_PATH, &query)?;
        Self::parse(resp, config::COLLECTIONS_PATH)
    }

    fn avg_price_by_fuel(&self) -> Result<Vec<AvgPriceByFuel>> {
        let resp = self.send(config::AVG_PRICE_BY_FUEL_PATH, &[])?;
        Self::parse(resp, config::AVG_PRICE_BY_FUEL_PATH)
    }

    fn volume_by_vehicle(&self) -> Result<Vec<VolumeByVehicle>> {
        let resp = self.send(config::VOLUME_BY_VEHICLE_PATH, &[])?;
        Self::parse(resp, config::VOLUME_BY_VEHICLE_PATH)
    }

    fn driver_report(&self, search: &str) -> Result<DriverReport> {
        let resp = self.send(config::DRIVER_REPORT_PATH, &[("search", search.to_string())])?;
        if resp.status() == StatusCode::NOT_FOUND {
            tracing::debug!(search, "no driver matched");
            return Err(FuelMonitorError::NotFound(format!(
                "No records found for: {}",
                search
            )));
        }
        Self::parse(resp, config::DRIVER_REPORT_PATH)
    }

    fn describe(&self) -> String {
        format!("remote({})", self.base_url)
    }
}

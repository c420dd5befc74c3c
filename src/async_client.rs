//! Async wrapper around [`FuelMonitorSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Remote
//! queries use a blocking HTTP client and local queries are CPU-bound but
//! fast, so both fit this model.
//!
//! Every call is an independent unit of work. Nothing is cancelled in
//! flight: dropping a pending future simply discards its result.
//!
//! # Example
//!
//! ```no_run
//! use fuel_monitor_sdk::{AsyncFuelMonitorSdk, CollectionFilters};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncFuelMonitorSdk::builder().local().build().await.unwrap();
//!
//!     let kpis = sdk.avg_price_by_fuel().await.unwrap();
//!     let page = sdk
//!         .collections(CollectionFilters::default(), Some(2), None)
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::config::DataSource;
use crate::dataset::Dataset;
use crate::error::{FuelMonitorError, Result};
use crate::models::{AvgPriceByFuel, CollectionFilters, CollectionsPage, DriverReport, VolumeByVehicle};
use crate::FuelMonitorSdk;

// ---------------------------------------------------------------------------
// AsyncFuelMonitorSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncFuelMonitorSdk`] instance.
pub struct AsyncFuelMonitorSdkBuilder {
    source: DataSource,
    dataset: Option<Dataset>,
    timeout: Duration,
}

impl Default for AsyncFuelMonitorSdkBuilder {
    fn default() -> Self {
        Self {
            source: DataSource::Remote {
                base_url: crate::config::DEFAULT_API_URL.to_string(),
            },
            dataset: None,
            timeout: crate::config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncFuelMonitorSdkBuilder {
    /// Start from the environment instead of the defaults.
    pub fn from_env() -> Self {
        Self::default().source(DataSource::from_env())
    }

    /// Set the data source explicitly.
    pub fn source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    /// Answer queries in-process with the local engine.
    pub fn local(self) -> Self {
        self.source(DataSource::Local)
    }

    /// Answer queries from a remote service at `base_url`.
    pub fn remote(self, base_url: impl Into<String>) -> Self {
        self.source(DataSource::Remote {
            base_url: base_url.into(),
        })
    }

    /// Dataset for the local engine.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Set the HTTP request timeout for remote calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncFuelMonitorSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = FuelMonitorSdk::builder()
                .source(self.source)
                .timeout(self.timeout);
            if let Some(dataset) = self.dataset {
                builder = builder.dataset(dataset);
            }
            let sdk = builder.build()?;
            Ok(AsyncFuelMonitorSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| FuelMonitorError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncFuelMonitorSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`FuelMonitorSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The SDK holds no mutable state, so it is
/// shared through an [`Arc`] without locking. Cloning is cheap.
#[derive(Clone)]
pub struct AsyncFuelMonitorSdk {
    inner: Arc<FuelMonitorSdk>,
}

impl AsyncFuelMonitorSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncFuelMonitorSdkBuilder {
        AsyncFuelMonitorSdkBuilder::default()
    }

    /// Wrap an already built [`FuelMonitorSdk`].
    pub fn from_sdk(sdk: FuelMonitorSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&FuelMonitorSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&FuelMonitorSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| FuelMonitorError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// List refueling records asynchronously.
    pub async fn collections(
        &self,
        filters: CollectionFilters,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> Result<CollectionsPage> {
        self.run(move |s| s.collections(&filters, page, page_size))
            .await
    }

    /// Average sale price per fuel type, asynchronously.
    pub async fn avg_price_by_fuel(&self) -> Result<Vec<AvgPriceByFuel>> {
        self.run(|s| s.avg_price_by_fuel()).await
    }

    /// Total volume per vehicle type, asynchronously.
    pub async fn volume_by_vehicle(&self) -> Result<Vec<VolumeByVehicle>> {
        self.run(|s| s.volume_by_vehicle()).await
    }

    /// Driver consumption report, asynchronously.
    pub async fn driver_report(&self, search: impl Into<String>) -> Result<DriverReport> {
        let search = search.into();
        self.run(move |s| s.driver_report(&search)).await
    }
}

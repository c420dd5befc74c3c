//! Fuel monitor SDK for Rust.
//!
//! Provides a high-level client for the fleet fuel-monitoring dashboard:
//! refueling records with filters and pagination, average price per fuel
//! type, volume per vehicle type, and per-driver consumption reports.
//! Queries are answered either by a remote service over HTTP or in-process
//! by the local engine over an immutable [`Dataset`].
//!
//! # Quick start
//!
//! ```no_run
//! use fuel_monitor_sdk::{CollectionFilters, FuelMonitorSdk};
//!
//! let sdk = FuelMonitorSdk::builder().local().build().unwrap();
//!
//! // First page of diesel refuels in São Paulo
//! let filters = CollectionFilters {
//!     fuel_type: Some("Diesel S10".to_string()),
//!     city: Some("são paulo".to_string()),
//!     ..Default::default()
//! };
//! let page = sdk.collections(&filters, None, None).unwrap();
//!
//! // Driver lookup by CPF or name
//! let report = sdk.driver_report("123.456.789-00").unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod backend;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod models;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncFuelMonitorSdk;
pub use backend::{FuelBackend, LocalBackend, RemoteBackend};
pub use config::DataSource;
pub use dataset::Dataset;
pub use error::{FuelMonitorError, Result};
pub use models::{
    AvgPriceByFuel, CollectionFilters, CollectionsPage, DriverReport, FuelCollection,
    VolumeByVehicle, VolumeShare,
};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FuelMonitorSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FuelMonitorSdk`] instance.
///
/// Use [`FuelMonitorSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FuelMonitorSdkBuilder::build) to create the SDK.
pub struct FuelMonitorSdkBuilder {
    source: DataSource,
    dataset: Option<Dataset>,
    timeout: Duration,
    backend: Option<Box<dyn FuelBackend>>,
}

impl Default for FuelMonitorSdkBuilder {
    fn default() -> Self {
        Self {
            source: DataSource::Remote {
                base_url: config::DEFAULT_API_URL.to_string(),
            },
            dataset: None,
            timeout: config::DEFAULT_TIMEOUT,
            backend: None,
        }
    }
}

impl FuelMonitorSdkBuilder {
    /// Start from the environment instead of the defaults.
    ///
    /// See [`DataSource::from_env`] for the variables consulted.
    pub fn from_env() -> Self {
        Self::default().source(DataSource::from_env())
    }

    /// Set the data source explicitly.
    pub fn source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    /// Answer queries in-process with the local engine.
    ///
    /// Uses the embedded reference dataset unless [`dataset()`](Self::dataset)
    /// is also given.
    pub fn local(self) -> Self {
        self.source(DataSource::Local)
    }

    /// Answer queries from a remote service at `base_url`.
    pub fn remote(self, base_url: impl Into<String>) -> Self {
        self.source(DataSource::Remote {
            base_url: base_url.into(),
        })
    }

    /// Dataset for the local engine. Ignored in remote mode.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Set the HTTP request timeout for remote calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom backend, overriding the data source.
    pub fn backend<B: FuelBackend + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Build the SDK.
    ///
    /// In local mode without an explicit dataset this parses the embedded
    /// reference records. In remote mode it only builds the HTTP client; no
    /// request is made until the first query.
    pub fn build(self) -> Result<FuelMonitorSdk> {
        if let Some(backend) = self.backend {
            return Ok(FuelMonitorSdk { backend });
        }

        let backend: Box<dyn FuelBackend> = match self.source {
            DataSource::Local => {
                let dataset = match self.dataset {
                    Some(dataset) => dataset,
                    None => Dataset::reference()?,
                };
                Box::new(LocalBackend::new(dataset))
            }
            DataSource::Remote { base_url } => {
                if base_url.trim().is_empty() {
                    return Err(FuelMonitorError::InvalidArgument(
                        "Remote base URL must not be empty".to_string(),
                    ));
                }
                Box::new(RemoteBackend::new(&base_url, self.timeout)?)
            }
        };

        tracing::debug!(backend = %backend.describe(), "fuel monitor SDK ready");
        Ok(FuelMonitorSdk { backend })
    }
}

// ---------------------------------------------------------------------------
// FuelMonitorSdk
// ---------------------------------------------------------------------------

/// The main entry point for the fuel monitor SDK.
///
/// Validates caller input, then routes each query to its [`FuelBackend`].
/// Holds no mutable state, so it can be shared freely between threads.
///
/// Created via [`FuelMonitorSdk::builder()`].
pub struct FuelMonitorSdk {
    backend: Box<dyn FuelBackend>,
}

impl FuelMonitorSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> FuelMonitorSdkBuilder {
        FuelMonitorSdkBuilder::default()
    }

    /// List refueling records matching `filters`, one page at a time.
    ///
    /// `page` defaults to 1 and `page_size` to 10. Zero for either is
    /// rejected with [`FuelMonitorError::InvalidArgument`]. A page past the
    /// last one returns empty `data` with the correct `total`.
    pub fn collections(
        &self,
        filters: &CollectionFilters,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> Result<CollectionsPage> {
        let page = page.unwrap_or(config::DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(config::DEFAULT_PAGE_SIZE);
        if page == 0 || page_size == 0 {
            return Err(FuelMonitorError::InvalidArgument(
                "page and page_size must be at least 1".to_string(),
            ));
        }
        self.backend.collections(filters, page, page_size)
    }

    /// Average sale price and record count per fuel type.
    pub fn avg_price_by_fuel(&self) -> Result<Vec<AvgPriceByFuel>> {
        self.backend.avg_price_by_fuel()
    }

    /// Total volume and record count per vehicle type.
    pub fn volume_by_vehicle(&self) -> Result<Vec<VolumeByVehicle>> {
        self.backend.volume_by_vehicle()
    }

    /// Share of the total volume per vehicle type, for the consumption chart.
    pub fn volume_shares(&self) -> Result<Vec<VolumeShare>> {
        let volumes = self.backend.volume_by_vehicle()?;
        Ok(queries::kpis::volume_shares(&volumes))
    }

    /// Consumption report for a driver, searched by CPF or name fragment.
    ///
    /// A search with no letters or digits is rejected as invalid input.
    /// When nothing matches, returns [`FuelMonitorError::NotFound`]; use
    /// [`FuelMonitorError::is_not_found`] to tell it apart from failures.
    pub fn driver_report(&self, search: &str) -> Result<DriverReport> {
        if format::normalize_search_term(search).is_empty() {
            return Err(FuelMonitorError::InvalidArgument(
                "Enter a CPF or name to search".to_string(),
            ));
        }
        self.backend.driver_report(search.trim())
    }

    /// Return a reference to the underlying [`FuelBackend`].
    pub fn backend(&self) -> &dyn FuelBackend {
        self.backend.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FuelMonitorSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FuelMonitorSdk(backend={})", self.backend.describe())
    }
}

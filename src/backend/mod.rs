//! Backends answering the four dashboard queries.
//!
//! [`FuelMonitorSdk`](crate::FuelMonitorSdk) routes every call through a
//! [`FuelBackend`]. [`LocalBackend`] runs the in-process query engine over a
//! [`Dataset`](crate::dataset::Dataset); [`RemoteBackend`] calls a service
//! implementing the same HTTP contract. Both report an unmatched driver
//! search as [`FuelMonitorError::NotFound`](crate::FuelMonitorError::NotFound).

pub mod local;
pub mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use crate::error::Result;
use crate::models::{AvgPriceByFuel, CollectionFilters, CollectionsPage, DriverReport, VolumeByVehicle};

/// A source of answers for the dashboard queries.
///
/// Implementations must be safe to share between threads; each call is an
/// independent read.
pub trait FuelBackend: Send + Sync {
    /// One page of the refueling records matching `filters`.
    fn collections(
        &self,
        filters: &CollectionFilters,
        page: usize,
        page_size: usize,
    ) -> Result<CollectionsPage>;

    /// Average sale price per fuel type.
    fn avg_price_by_fuel(&self) -> Result<Vec<AvgPriceByFuel>>;

    /// Total volume sold per vehicle type.
    fn volume_by_vehicle(&self) -> Result<Vec<VolumeByVehicle>>;

    /// Consumption report for the driver matching `search`.
    fn driver_report(&self, search: &str) -> Result<DriverReport>;

    /// Short human-readable description, used in `Display` output.
    fn describe(&self) -> String;
}

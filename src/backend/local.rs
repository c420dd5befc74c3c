use crate::backend::FuelBackend;
use crate::dataset::Dataset;
use crate::error::{FuelMonitorError, Result};
use crate::models::{AvgPriceByFuel, CollectionFilters, CollectionsPage, DriverReport, VolumeByVehicle};
use crate::queries::{CollectionQuery, KpiQuery, ReportQuery};

/// Answers queries in-process from a [`Dataset`].
#[derive(Debug, Clone)]
pub struct LocalBackend {
    dataset: Dataset,
}

impl LocalBackend {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Backend over the embedded reference dataset.
    pub fn reference() -> Result<Self> {
        Ok(Self::new(Dataset::reference()?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl FuelBackend for LocalBackend {
    fn collections(
        &self,
        filters: &CollectionFilters,
        page: usize,
        page_size: usize,
    ) -> Result<CollectionsPage> {
        CollectionQuery::new(&self.dataset).list(filters, page, page_size)
    }

    fn avg_price_by_fuel(&self) -> Result<Vec<AvgPriceByFuel>> {
        Ok(KpiQuery::new(&self.dataset).avg_price_by_fuel())
    }

    fn volume_by_vehicle(&self) -> Result<Vec<VolumeByVehicle>> {
        Ok(KpiQuery::new(&self.dataset).volume_by_vehicle())
    }

    fn driver_report(&self, search: &str) -> Result<DriverReport> {
        ReportQuery::new(&self.dataset)
            .driver_report(search)
            .ok_or_else(|| {
                tracing::debug!(search, "no driver matched");
                FuelMonitorError::NotFound(format!("No records found for: {}", search))
            })
    }

    fn describe(&self) -> String {
        format!("local({} records)", self.dataset.len())
    }
}

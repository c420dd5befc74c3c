//! Filtered, paginated listing of refueling records.

use crate::dataset::Dataset;
use crate::error::{FuelMonitorError, Result};
use crate::models::{CollectionFilters, CollectionsPage, FuelCollection};

// ---------------------------------------------------------------------------
// CollectionQuery
// ---------------------------------------------------------------------------

/// Query interface for listing refueling records.
pub struct CollectionQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> CollectionQuery<'a> {
    /// Create a new `CollectionQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// List one page of the records matching `filters`.
    ///
    /// Filters are combined with AND and dataset order is preserved. `total`
    /// counts every match; `data` holds the slice for `page` (1-based). A
    /// page past the end yields empty `data`, not an error.
    pub fn list(
        &self,
        filters: &CollectionFilters,
        page: usize,
        page_size: usize,
    ) -> Result<CollectionsPage> {
        if page == 0 {
            return Err(FuelMonitorError::InvalidArgument(
                "page must be at least 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(FuelMonitorError::InvalidArgument(
                "page_size must be at least 1".to_string(),
            ));
        }

        let matching: Vec<&FuelCollection> = self.filter(filters).collect();
        let total = matching.len();
        let start = (page - 1).saturating_mul(page_size);

        let data = matching
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        Ok(CollectionsPage {
            total,
            page,
            page_size,
            data,
        })
    }

    /// Count the records matching `filters`.
    pub fn count(&self, filters: &CollectionFilters) -> usize {
        self.filter(filters).count()
    }

    /// Iterate over the records matching `filters`, in dataset order.
    pub fn filter<'f>(
        &self,
        filters: &'f CollectionFilters,
    ) -> impl Iterator<Item = &'a FuelCollection> + 'f
    where
        'a: 'f,
    {
        let dataset = self.dataset;
        dataset.iter().filter(move |r| matches(filters, r))
    }
}

/// Whether `record` satisfies every filter that is set.
pub fn matches(filters: &CollectionFilters, record: &FuelCollection) -> bool {
    if let Some(fuel_type) = filters.fuel_type() {
        if record.fuel_type != fuel_type {
            return false;
        }
    }
    if let Some(vehicle_type) = filters.vehicle_type() {
        if record.vehicle_type != vehicle_type {
            return false;
        }
    }
    if let Some(city) = filters.city() {
        if !record.city.to_lowercase().contains(&city.to_lowercase()) {
            return false;
        }
    }
    true
}

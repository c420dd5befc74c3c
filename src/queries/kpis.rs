//! KPI aggregations: average price per fuel type and volume per vehicle type.
//!
//! Groups are derived from the data; no fuel or vehicle universe is assumed.
//! Results are sorted by their headline value, descending, with ties kept in
//! the order the group was first seen.

use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::models::{AvgPriceByFuel, FuelCollection, VolumeByVehicle, VolumeShare};

// ---------------------------------------------------------------------------
// KpiQuery
// ---------------------------------------------------------------------------

/// Query interface for the dashboard KPIs.
pub struct KpiQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> KpiQuery<'a> {
    /// Create a new `KpiQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Arithmetic mean of `sale_price` and record count per fuel type.
    pub fn avg_price_by_fuel(&self) -> Vec<AvgPriceByFuel> {
        let mut rows: Vec<AvgPriceByFuel> = group_by(self.dataset, |r| &r.fuel_type)
            .into_iter()
            .map(|(fuel_type, group)| AvgPriceByFuel {
                fuel_type,
                avg_price: group.iter().map(|r| r.sale_price).sum::<f64>() / group.len() as f64,
                total_records: group.len(),
            })
            .collect();

        rows.sort_by(|a, b| b.avg_price.total_cmp(&a.avg_price));
        rows
    }

    /// Total `volume_sold` and record count per vehicle type.
    pub fn volume_by_vehicle(&self) -> Vec<VolumeByVehicle> {
        let mut rows: Vec<VolumeByVehicle> = group_by(self.dataset, |r| &r.vehicle_type)
            .into_iter()
            .map(|(vehicle_type, group)| VolumeByVehicle {
                vehicle_type,
                total_volume: group.iter().map(|r| r.volume_sold).sum(),
                total_records: group.len(),
            })
            .collect();

        rows.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
        rows
    }

    /// Fraction of the overall volume consumed by each vehicle type.
    pub fn volume_shares(&self) -> Vec<VolumeShare> {
        volume_shares(&self.volume_by_vehicle())
    }
}

/// Convert per-vehicle volumes into fractions of their sum.
///
/// Every share is 0 when the total volume is 0.
pub fn volume_shares(volumes: &[VolumeByVehicle]) -> Vec<VolumeShare> {
    let total: f64 = volumes.iter().map(|v| v.total_volume).sum();
    volumes
        .iter()
        .map(|v| VolumeShare {
            vehicle_type: v.vehicle_type.clone(),
            share: if total > 0.0 { v.total_volume / total } else { 0.0 },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Group records by a string key, keeping groups in first-seen order.
fn group_by<'d, F>(dataset: &'d Dataset, key: F) -> Vec<(String, Vec<&'d FuelCollection>)>
where
    F: Fn(&FuelCollection) -> &String,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'d FuelCollection>)> = Vec::new();

    for record in dataset {
        let k = key(record);
        match index.get(k.as_str()) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(k.as_str(), groups.len());
                groups.push((k.clone(), vec![record]));
            }
        }
    }

    groups
}

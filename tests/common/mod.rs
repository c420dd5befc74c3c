//! Shared test fixtures for the fuel monitor SDK integration tests.
//!
//! Provides the reference dataset and SDK, plus `record()` for building small
//! hand-made datasets.

#![allow(dead_code)]

use fuel_monitor_sdk::{Dataset, FuelCollection, FuelMonitorSdk};

/// Ids of the João Silva refuels in the reference dataset.
pub const JOAO_IDS: [i64; 3] = [1, 4, 14];

pub fn reference_dataset() -> Dataset {
    Dataset::reference().unwrap()
}

/// SDK answering from the reference dataset with the local engine.
pub fn reference_sdk() -> FuelMonitorSdk {
    FuelMonitorSdk::builder().local().build().unwrap()
}

/// A record with the given identity and measures. Other fields are filler.
pub fn record(
    id: i64,
    fuel_type: &str,
    vehicle_type: &str,
    city: &str,
    driver: (&str, &str),
    sale_price: f64,
    volume_sold: f64,
) -> FuelCollection {
    FuelCollection {
        id,
        store_id: format!("{}", 100 + id),
        store_name: format!("Posto {}", id),
        city: city.to_string(),
        state: "SP".to_string(),
        collection_date: "2024-03-15T08:30:00".to_string(),
        fuel_type: fuel_type.to_string(),
        sale_price,
        volume_sold,
        driver_name: driver.0.to_string(),
        driver_cpf: driver.1.to_string(),
        driver_cpf_masked: String::new(),
        vehicle_plate: "ABC-1234".to_string(),
        vehicle_type: vehicle_type.to_string(),
    }
}

pub fn ids(records: &[FuelCollection]) -> Vec<i64> {
    records.iter().map(|r| r.id).collect()
}

/// Float comparison with a small relative tolerance.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

use serde::{Deserialize, Serialize};

use super::collection::FuelCollection;

// ---------------------------------------------------------------------------
// DriverReport — Consumption summary for a driver search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DriverReport {
    pub driver_name: String,
    pub driver_cpf_masked: String,
    pub total_refuels: usize,
    pub total_spent: f64,
    pub total_volume: f64,
    pub favorite_fuel: String,
    pub refuels: Vec<FuelCollection>,
}

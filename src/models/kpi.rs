use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AvgPriceByFuel — Average sale price per fuel type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AvgPriceByFuel {
    pub fuel_type: String,
    pub avg_price: f64,
    pub total_records: usize,
}

// ---------------------------------------------------------------------------
// VolumeByVehicle — Total volume sold per vehicle type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VolumeByVehicle {
    pub vehicle_type: String,
    pub total_volume: f64,
    pub total_records: usize,
}

// ---------------------------------------------------------------------------
// VolumeShare — Fraction of all volume consumed by a vehicle type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VolumeShare {
    pub vehicle_type: String,
    /// Between 0 and 1.
    pub share: f64,
}

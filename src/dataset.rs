//! Immutable, validated record sets for the local query engine.
//!
//! A [`Dataset`] is built once (from the embedded reference records, a JSON
//! file, or the synthetic generator) and never mutated afterwards. Every
//! query borrows it read-only.

use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{Duration, NaiveDate};
use flate2::read::GzDecoder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::error::{FuelMonitorError, Result};
use crate::format;
use crate::models::FuelCollection;

/// The 15 sample refueling records the dashboard ships with.
const REFERENCE_JSON: &str = include_str!("../data/reference_collections.json");

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// An ordered, read-only collection of [`FuelCollection`] records.
///
/// Record order is significant: listings and driver reports preserve it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<FuelCollection>,
}

impl Dataset {
    /// Build a dataset, validating every record.
    ///
    /// Rejects negative or non-finite prices and volumes, CPFs without 11
    /// digits, and duplicate ids. Records missing `driver_cpf_masked` get it
    /// derived from the CPF.
    pub fn new(records: Vec<FuelCollection>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut validated = Vec::with_capacity(records.len());

        for mut record in records {
            validate_record(&record)?;
            if !seen.insert(record.id) {
                return Err(invalid(record.id, "duplicate id"));
            }
            if record.driver_cpf_masked.is_empty() {
                record.driver_cpf_masked = format::mask_cpf(&record.driver_cpf);
            }
            validated.push(record);
        }

        Ok(Self { records: validated })
    }

    /// The embedded reference dataset.
    pub fn reference() -> Result<Self> {
        Self::from_json_str(REFERENCE_JSON)
    }

    /// Parse a dataset from JSON text.
    ///
    /// Accepts either a bare array of records or an object with the records
    /// under `"data"` (the shape of a collections page).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let array = match value {
            Value::Array(arr) => Value::Array(arr),
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(arr)) => Value::Array(arr),
                _ => {
                    return Err(FuelMonitorError::InvalidArgument(
                        "Dataset object has no \"data\" array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(FuelMonitorError::InvalidArgument(
                    "Dataset must be a JSON array or an object with \"data\"".to_string(),
                ))
            }
        };
        let records: Vec<FuelCollection> = serde_json::from_value(array)?;
        Self::new(records)
    }

    /// Load a dataset from a JSON file (handles `.gz` transparently).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
            let file = fs::File::open(path)?;
            let decoder = GzDecoder::new(BufReader::new(file));
            let mut reader = BufReader::new(decoder);
            let mut contents = String::new();
            reader.read_to_string(&mut contents)?;
            contents
        } else {
            fs::read_to_string(path)?
        };

        let dataset = Self::from_json_str(&contents)?;
        tracing::debug!(
            records = dataset.len(),
            path = %path.display(),
            "loaded fuel collection dataset"
        );
        Ok(dataset)
    }

    /// Generate `count` synthetic records from a fixed seed.
    ///
    /// Prices and volumes are drawn from realistic ranges per fuel and
    /// vehicle type. Drivers are drawn from a pool about a third the size of
    /// `count`, so most of them refuel more than once. The same seed always
    /// produces the same dataset.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let drivers: Vec<SyntheticDriver> = (0..count / 3 + 1)
            .map(|_| SyntheticDriver::random(&mut rng))
            .collect();
        let base = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(6, 0, 0))
            .unwrap_or_default();

        let records = (0..count)
            .map(|i| {
                let station = &STATIONS[rng.gen_range(0..STATIONS.len())];
                let (fuel_type, price_min, price_max) =
                    FUEL_PRICE_RANGES[rng.gen_range(0..FUEL_PRICE_RANGES.len())];
                let driver = &drivers[rng.gen_range(0..drivers.len())];
                let (volume_min, volume_max) = vehicle_volume_range(driver.vehicle_type);
                let offset = Duration::minutes(rng.gen_range(0..30 * 24 * 60));

                FuelCollection {
                    id: i as i64 + 1,
                    store_id: station.store_id.to_string(),
                    store_name: station.store_name.to_string(),
                    city: station.city.to_string(),
                    state: station.state.to_string(),
                    collection_date: (base + offset).format("%Y-%m-%dT%H:%M:%S").to_string(),
                    fuel_type: fuel_type.to_string(),
                    sale_price: round2(rng.gen_range(price_min..price_max)),
                    volume_sold: round2(rng.gen_range(volume_min..volume_max)),
                    driver_name: driver.name.clone(),
                    driver_cpf: driver.cpf.clone(),
                    driver_cpf_masked: format::mask_cpf(&driver.cpf),
                    vehicle_plate: driver.plate.clone(),
                    vehicle_type: driver.vehicle_type.to_string(),
                }
            })
            .collect();

        Self { records }
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[FuelCollection] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuelCollection> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: i64) -> Option<&FuelCollection> {
        self.records.iter().find(|r| r.id == id)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a FuelCollection;
    type IntoIter = std::slice::Iter<'a, FuelCollection>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_record(record: &FuelCollection) -> Result<()> {
    if !record.sale_price.is_finite() || record.sale_price < 0.0 {
        return Err(invalid(record.id, "sale_price must be a non-negative number"));
    }
    if !record.volume_sold.is_finite() || record.volume_sold < 0.0 {
        return Err(invalid(record.id, "volume_sold must be a non-negative number"));
    }
    if !format::validate_cpf(&record.driver_cpf) {
        return Err(invalid(record.id, "driver_cpf must have 11 digits"));
    }
    Ok(())
}

fn invalid(id: i64, reason: &str) -> FuelMonitorError {
    FuelMonitorError::InvalidRecord {
        id,
        reason: reason.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Synthetic data
// ---------------------------------------------------------------------------

struct Station {
    store_id: &'static str,
    store_name: &'static str,
    city: &'static str,
    state: &'static str,
}

const STATIONS: [Station; 8] = [
    Station { store_id: "12345678000190", store_name: "Posto Estrela", city: "São Paulo", state: "SP" },
    Station { store_id: "98765432000111", store_name: "Auto Posto BR", city: "Rio de Janeiro", state: "RJ" },
    Station { store_id: "11223344000155", store_name: "Posto Horizonte", city: "Belo Horizonte", state: "MG" },
    Station { store_id: "55667788000199", store_name: "Combustível Rápido", city: "Curitiba", state: "PR" },
    Station { store_id: "99887766000122", store_name: "Posto Atlântico", city: "Salvador", state: "BA" },
    Station { store_id: "33445566000177", store_name: "Auto Center", city: "Brasília", state: "DF" },
    Station { store_id: "77889900000133", store_name: "Posto Sul", city: "Porto Alegre", state: "RS" },
    Station { store_id: "22334455000188", store_name: "Combustível Norte", city: "Manaus", state: "AM" },
];

/// Price range in R$/L per fuel type.
const FUEL_PRICE_RANGES: [(&str, f64, f64); 3] = [
    ("Gasolina", 5.50, 6.50),
    ("Etanol", 3.80, 4.80),
    ("Diesel S10", 5.80, 6.80),
];

fn vehicle_volume_range(vehicle_type: &str) -> (f64, f64) {
    match vehicle_type {
        "Moto" => (10.0, 20.0),
        "Caminhão Leve" => (80.0, 150.0),
        "Carreta" => (300.0, 600.0),
        "Ônibus" => (200.0, 400.0),
        _ => (30.0, 60.0),
    }
}

const FIRST_NAMES: [&str; 12] = [
    "Ana", "Bruno", "Camila", "Diego", "Eduarda", "Felipe", "Gabriela", "Henrique", "Isabela",
    "Marcos", "Patrícia", "Rafael",
];

const LAST_NAMES: [&str; 10] = [
    "Almeida", "Barbosa", "Carvalho", "Gomes", "Martins", "Pereira", "Ribeiro", "Rocha",
    "Souza", "Teixeira",
];

struct SyntheticDriver {
    name: String,
    cpf: String,
    plate: String,
    vehicle_type: &'static str,
}

impl SyntheticDriver {
    fn random(rng: &mut StdRng) -> Self {
        let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];

        let digits: String = (0..11)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        let cpf = format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        );

        let letters: String = (0..3)
            .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
            .collect();
        let plate = format!("{}-{:04}", letters, rng.gen_range(0..10_000));

        let vehicle_type =
            crate::config::VEHICLE_TYPES[rng.gen_range(0..crate::config::VEHICLE_TYPES.len())];

        Self {
            name: format!("{} {}", first, last),
            cpf,
            plate,
            vehicle_type,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

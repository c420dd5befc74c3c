use std::env;
use std::time::Duration;

/// Base URL used when `FUEL_MONITOR_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable holding the remote service base URL.
pub const API_URL_ENV: &str = "FUEL_MONITOR_API_URL";

/// Environment variable selecting the local engine (`1`, `true`, `yes`).
pub const USE_MOCK_ENV: &str = "FUEL_MONITOR_USE_MOCK";

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound the reference service enforces on `page_size`.
pub const MAX_PAGE_SIZE: usize = 100;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// Remote endpoint paths
pub const COLLECTIONS_PATH: &str = "/collections";
pub const AVG_PRICE_BY_FUEL_PATH: &str = "/kpis/avg-price-by-fuel";
pub const VOLUME_BY_VEHICLE_PATH: &str = "/kpis/volume-by-vehicle";
pub const DRIVER_REPORT_PATH: &str = "/reports/drivers";

/// Known fuel types of the reference dataset. The engine never relies on
/// this list; groups are always derived from the data.
pub const FUEL_TYPES: [&str; 3] = ["Gasolina", "Etanol", "Diesel S10"];

/// Known vehicle types of the reference dataset.
pub const VEHICLE_TYPES: [&str; 5] = ["Carro", "Moto", "Caminhão Leve", "Carreta", "Ônibus"];

/// Where the SDK gets its answers from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Query an in-process dataset with the local engine.
    Local,
    /// Query a remote service implementing the HTTP contract.
    Remote { base_url: String },
}

impl DataSource {
    /// Resolve the data source from the environment.
    ///
    /// `FUEL_MONITOR_USE_MOCK` selects [`DataSource::Local`]; otherwise the
    /// remote base URL is read from `FUEL_MONITOR_API_URL`, falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        let use_mock = env::var(USE_MOCK_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        if use_mock {
            DataSource::Local
        } else {
            DataSource::Remote {
                base_url: api_base_url(),
            }
        }
    }
}

/// Remote base URL from `FUEL_MONITOR_API_URL`, or [`DEFAULT_API_URL`].
pub fn api_base_url() -> String {
    match env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[derive(Debug, thiserror::Error)]
pub enum FuelMonitorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: i64, reason: String },

    #[error("Service error: {endpoint} returned status {status}")]
    Service { status: u16, endpoint: String },
}

impl FuelMonitorError {
    /// Whether this is the expected "nothing matched" outcome of a lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FuelMonitorError::NotFound(_))
    }

    /// Message suitable for showing to a dashboard user.
    ///
    /// Validation failures carry their own text; not-found has a fixed
    /// wording; every transport or service failure collapses into one
    /// generic message.
    pub fn user_message(&self) -> String {
        match self {
            FuelMonitorError::InvalidArgument(msg) => msg.clone(),
            FuelMonitorError::NotFound(_) => {
                "Driver not found. Check the CPF or name.".to_string()
            }
            FuelMonitorError::InvalidRecord { .. } => {
                "The dataset contains invalid records.".to_string()
            }
            _ => "Could not load data from the fuel monitor service.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FuelMonitorError>;

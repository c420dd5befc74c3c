use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// FuelCollection — One refueling event
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FuelCollection {
    pub id: i64,
    #[serde(deserialize_with = "string_or_number")]
    pub store_id: String,
    pub store_name: String,
    pub city: String,
    pub state: String,
    pub collection_date: String,
    pub fuel_type: String,
    pub sale_price: f64,
    pub volume_sold: f64,
    pub driver_name: String,
    pub driver_cpf: String,
    /// Display form of `driver_cpf`. Filled in from the CPF when a dataset
    /// is loaded without it.
    #[serde(default)]
    pub driver_cpf_masked: String,
    pub vehicle_plate: String,
    pub vehicle_type: String,
}

impl FuelCollection {
    /// Amount paid for this refuel (`sale_price * volume_sold`).
    pub fn amount_spent(&self) -> f64 {
        self.sale_price * self.volume_sold
    }
}

/// Store ids arrive as numbers from some sources and as CNPJ-like text from
/// others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

// ---------------------------------------------------------------------------
// CollectionFilters — Optional filters for the collections listing
// ---------------------------------------------------------------------------

/// Filters for listing collections. All provided filters must match.
///
/// An empty string is treated the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionFilters {
    /// Exact, case-sensitive match on `fuel_type`.
    pub fuel_type: Option<String>,
    /// Exact, case-sensitive match on `vehicle_type`.
    pub vehicle_type: Option<String>,
    /// Case-insensitive substring match on `city`.
    pub city: Option<String>,
}

impl CollectionFilters {
    pub fn fuel_type(&self) -> Option<&str> {
        non_empty(&self.fuel_type)
    }

    pub fn vehicle_type(&self) -> Option<&str> {
        non_empty(&self.vehicle_type)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// CollectionsPage — Paginated view over a filtered record set
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionsPage {
    /// Number of records matching the filters, before pagination.
    pub total: usize,
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    pub data: Vec<FuelCollection>,
}

impl CollectionsPage {
    /// Number of pages needed to show `total` records.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

//! Driver lookup and per-driver consumption report.

use crate::dataset::Dataset;
use crate::format;
use crate::models::{DriverReport, FuelCollection};

// ---------------------------------------------------------------------------
// ReportQuery
// ---------------------------------------------------------------------------

/// Query interface for driver reports.
pub struct ReportQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> ReportQuery<'a> {
    /// Create a new `ReportQuery` bound to the given dataset.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Records whose driver matches `search`, in dataset order.
    ///
    /// The term is normalized with [`format::normalize_search_term`]. A record
    /// matches when its CPF digits contain the term (whitespace removed) or
    /// its lowercased driver name contains the term. A term that normalizes
    /// to nothing matches no record.
    pub fn find_refuels(&self, search: &str) -> Vec<&'a FuelCollection> {
        let term = format::normalize_search_term(search);
        if term.is_empty() {
            return Vec::new();
        }
        let compact: String = term.chars().filter(|c| !c.is_whitespace()).collect();

        let dataset = self.dataset;
        dataset
            .iter()
            .filter(|r| {
                let cpf: String = r
                    .driver_cpf
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase();
                cpf.contains(&compact) || r.driver_name.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Build the consumption report for the driver matching `search`.
    ///
    /// Returns `None` when no record matches. Name and masked CPF come from
    /// the first match; the matches are not checked to belong to the same
    /// person.
    pub fn driver_report(&self, search: &str) -> Option<DriverReport> {
        let refuels = self.find_refuels(search);
        let first = refuels.first()?;

        Some(DriverReport {
            driver_name: first.driver_name.clone(),
            driver_cpf_masked: first.driver_cpf_masked.clone(),
            total_refuels: refuels.len(),
            total_spent: refuels.iter().map(|r| r.amount_spent()).sum(),
            total_volume: refuels.iter().map(|r| r.volume_sold).sum(),
            favorite_fuel: favorite_fuel(&refuels),
            refuels: refuels.into_iter().cloned().collect(),
        })
    }
}

/// Most frequent fuel type; on a tie the one seen first wins.
fn favorite_fuel(refuels: &[&FuelCollection]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for r in refuels {
        match counts.iter_mut().find(|(fuel, _)| *fuel == r.fuel_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.fuel_type.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (fuel, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((fuel, n));
        }
    }
    best.map(|(fuel, _)| fuel.to_string()).unwrap_or_default()
}

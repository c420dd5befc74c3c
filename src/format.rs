//! Display formatting and CPF helpers.
//!
//! Output follows the pt-BR conventions the dashboard renders with: `,` as
//! the decimal separator, `.` for thousands and the `R$` currency symbol.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{FuelMonitorError, Result};

const DATE_DISPLAY: &str = "%d/%m/%Y, %H:%M";

/// Naive timestamp layouts accepted by [`format_date`], tried in order.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const MASKED_CPF_FALLBACK: &str = "XXX.XXX.XXX-XX";

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

/// Format an amount as Brazilian reais, e.g. `1234.5` -> `R$ 1.234,50`.
///
/// The symbol is followed by a non-breaking space, matching what browsers
/// produce for the `pt-BR` locale.
pub fn format_currency(value: f64) -> String {
    let (negative, digits) = split_decimal(value);
    let sign = if negative { "-" } else { "" };
    format!("{}R$\u{a0}{}", sign, digits)
}

/// Format a liter quantity with two decimals, e.g. `45.5` -> `45,50 L`.
pub fn format_volume(value: f64) -> String {
    let formatted = format!("{:.2}", value).replace('.', ",");
    format!("{} L", formatted)
}

/// Format a fraction as a whole percentage, e.g. `0.345` -> `35%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Round to two decimals and render with pt-BR separators.
fn split_decimal(value: f64) -> (bool, String) {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed != "0.00";
    (negative, format!("{},{}", grouped, frac_part))
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Format a collection timestamp as `dd/mm/yyyy, HH:MM`.
///
/// RFC 3339 timestamps are rendered in the offset they were written with;
/// naive timestamps are rendered as-is. A bare date renders at midnight.
pub fn format_date(timestamp: &str) -> Result<String> {
    let input = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.format(DATE_DISPLAY).to_string());
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, layout) {
            return Ok(dt.format(DATE_DISPLAY).to_string());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.format(DATE_DISPLAY).to_string());
        }
    }

    Err(FuelMonitorError::InvalidArgument(format!(
        "Unrecognized timestamp: {}",
        timestamp
    )))
}

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

/// Keep only the ASCII digits of `value`.
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Structural CPF check: exactly 11 digits once punctuation is removed.
///
/// The check-digit algorithm is not applied.
pub fn validate_cpf(cpf: &str) -> bool {
    strip_non_digits(cpf).len() == 11
}

/// Masked display form of a CPF: the first six digits followed by `XXX-XX`.
///
/// `123.456.789-00` and `12345678900` both become `123.456.XXX-XX`. Inputs
/// with fewer than six digits are fully masked.
pub fn mask_cpf(cpf: &str) -> String {
    let digits = strip_non_digits(cpf);
    if digits.len() < 6 {
        return MASKED_CPF_FALLBACK.to_string();
    }
    format!("{}.{}.XXX-XX", &digits[0..3], &digits[3..6])
}

/// Normalize a driver search term: lowercase, punctuation removed, trimmed.
///
/// Whitespace inside the term is kept so multi-word names still match.
pub fn normalize_search_term(term: &str) -> String {
    term.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

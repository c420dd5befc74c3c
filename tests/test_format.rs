//! Formatting and CPF helper tests.

use fuel_monitor_sdk::format::{
    format_currency, format_date, format_percent, format_volume, mask_cpf,
    normalize_search_term, strip_non_digits, validate_cpf,
};

// ---------------------------------------------------------------------------
// Currency / volume / percent
// ---------------------------------------------------------------------------

#[test]
fn currency_uses_brazilian_separators() {
    assert_eq!(format_currency(5.89), "R$\u{a0}5,89");
    assert_eq!(format_currency(1234.5), "R$\u{a0}1.234,50");
    assert_eq!(format_currency(1234567.891), "R$\u{a0}1.234.567,89");
}

#[test]
fn currency_handles_zero_and_negatives() {
    assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
    assert_eq!(format_currency(-10.0), "-R$\u{a0}10,00");
    assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
}

#[test]
fn volume_has_two_decimals_and_unit() {
    assert_eq!(format_volume(45.5), "45,50 L");
    assert_eq!(format_volume(0.0), "0,00 L");
    assert_eq!(format_volume(380.126), "380,13 L");
}

#[test]
fn percent_rounds_to_whole_number() {
    assert_eq!(format_percent(0.25), "25%");
    assert_eq!(format_percent(0.5151), "52%");
    assert_eq!(format_percent(1.0), "100%");
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn date_from_naive_timestamp() {
    assert_eq!(format_date("2024-03-15T08:30:00").unwrap(), "15/03/2024, 08:30");
    assert_eq!(format_date("2024-03-15 14:10:00").unwrap(), "15/03/2024, 14:10");
    assert_eq!(format_date("2024-03-15T14:10:00.123456").unwrap(), "15/03/2024, 14:10");
    assert_eq!(format_date("2024-03-15T14:10").unwrap(), "15/03/2024, 14:10");
}

#[test]
fn date_with_offset_keeps_written_time() {
    assert_eq!(format_date("2024-03-15T08:30:00-03:00").unwrap(), "15/03/2024, 08:30");
    assert_eq!(format_date("2024-03-15T23:05:00Z").unwrap(), "15/03/2024, 23:05");
}

#[test]
fn bare_date_renders_at_midnight() {
    assert_eq!(format_date("2024-03-01").unwrap(), "01/03/2024, 00:00");
}

#[test]
fn unparseable_date_is_invalid_argument() {
    let err = format_date("yesterday").unwrap_err();
    assert!(matches!(err, fuel_monitor_sdk::FuelMonitorError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// CPF
// ---------------------------------------------------------------------------

#[test]
fn validate_cpf_checks_digit_count_only() {
    assert!(validate_cpf("123.456.789-00"));
    assert!(validate_cpf("12345678900"));
    // No check-digit verification
    assert!(validate_cpf("000.000.000-00"));
    assert!(!validate_cpf("123"));
    assert!(!validate_cpf("123.456.789-001"));
    assert!(!validate_cpf(""));
}

#[test]
fn strip_non_digits_keeps_ascii_digits() {
    assert_eq!(strip_non_digits("123.456.789-00"), "12345678900");
    assert_eq!(strip_non_digits("abc"), "");
}

#[test]
fn mask_cpf_keeps_first_six_digits() {
    assert_eq!(mask_cpf("123.456.789-00"), "123.456.XXX-XX");
    assert_eq!(mask_cpf("98765432100"), "987.654.XXX-XX");
}

#[test]
fn mask_cpf_short_input_is_fully_masked() {
    assert_eq!(mask_cpf("123"), "XXX.XXX.XXX-XX");
}

#[test]
fn normalize_search_term_drops_punctuation_and_case() {
    assert_eq!(normalize_search_term("123.456.789-00"), "12345678900");
    assert_eq!(normalize_search_term("  João Silva "), "joão silva");
    assert_eq!(normalize_search_term("MARIA"), "maria");
    assert_eq!(normalize_search_term(".-/"), "");
}

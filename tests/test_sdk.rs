//! Facade tests: input validation, routing and error signalling.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fuel_monitor_sdk::{
    AvgPriceByFuel, CollectionFilters, CollectionsPage, DataSource, Dataset, DriverReport,
    FuelBackend, FuelMonitorError, FuelMonitorSdk, LocalBackend, Result, VolumeByVehicle,
};

// ---------------------------------------------------------------------------
// Local mode
// ---------------------------------------------------------------------------

#[test]
fn local_mode_defaults_to_reference_dataset() {
    let sdk = common::reference_sdk();
    let page = sdk.collections(&CollectionFilters::default(), None, None).unwrap();
    assert_eq!(page.total, 15);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.data.len(), 10);
}

#[test]
fn local_mode_uses_given_dataset() {
    let sdk = FuelMonitorSdk::builder()
        .local()
        .dataset(Dataset::generate(25, 9))
        .build()
        .unwrap();
    let page = sdk.collections(&CollectionFilters::default(), Some(3), None).unwrap();
    assert_eq!(page.total, 25);
    assert_eq!(page.data.len(), 5);
}

#[test]
fn source_value_selects_local_engine() {
    let sdk = FuelMonitorSdk::builder()
        .source(DataSource::Local)
        .build()
        .unwrap();
    assert_eq!(sdk.to_string(), "FuelMonitorSdk(backend=local(15 records))");
}

#[test]
fn local_backend_exposes_its_dataset() {
    let backend = LocalBackend::reference().unwrap();
    assert_eq!(backend.dataset().len(), 15);
    assert_eq!(backend.dataset(), &Dataset::reference().unwrap());

    let sdk = FuelMonitorSdk::builder().backend(backend).build().unwrap();
    assert_eq!(sdk.backend().describe(), "local(15 records)");
    assert_eq!(sdk.backend().avg_price_by_fuel().unwrap().len(), 3);
}

#[test]
fn zero_page_is_invalid_argument() {
    let sdk = common::reference_sdk();
    let err = sdk
        .collections(&CollectionFilters::default(), Some(0), None)
        .unwrap_err();
    assert!(matches!(err, FuelMonitorError::InvalidArgument(_)));
    assert_eq!(err.user_message(), "page and page_size must be at least 1");
}

#[test]
fn driver_report_found() {
    let sdk = common::reference_sdk();
    let report = sdk.driver_report("  123.456.789-00 ").unwrap();
    assert_eq!(report.total_refuels, 3);
    assert_eq!(report.driver_name, "João Silva");
}

#[test]
fn driver_report_not_found_is_distinguished() {
    let sdk = common::reference_sdk();
    let err = sdk.driver_report("nonexistent-name-xyz").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "Driver not found. Check the CPF or name.");
}

#[test]
fn empty_search_is_invalid_argument() {
    let sdk = common::reference_sdk();
    for term in ["", "   ", ".-."] {
        let err = sdk.driver_report(term).unwrap_err();
        assert!(matches!(err, FuelMonitorError::InvalidArgument(_)), "term {:?}", term);
        assert!(!err.is_not_found());
    }
}

#[test]
fn kpis_through_the_facade() {
    let sdk = common::reference_sdk();
    assert_eq!(sdk.avg_price_by_fuel().unwrap().len(), 3);
    assert_eq!(sdk.volume_by_vehicle().unwrap().len(), 5);

    let shares = sdk.volume_shares().unwrap();
    let total: f64 = shares.iter().map(|s| s.share).sum();
    assert!(common::approx_eq(total, 1.0));
}

#[test]
fn remote_mode_rejects_empty_base_url() {
    let err = FuelMonitorSdk::builder().remote("  ").build().err().unwrap();
    assert!(matches!(err, FuelMonitorError::InvalidArgument(_)));
}

#[test]
fn remote_mode_describes_base_url() {
    let sdk = FuelMonitorSdk::builder()
        .remote("http://fuel.example:8000/")
        .build()
        .unwrap();
    assert_eq!(sdk.to_string(), "FuelMonitorSdk(backend=remote(http://fuel.example:8000))");
}

// ---------------------------------------------------------------------------
// Injected backend
// ---------------------------------------------------------------------------

/// Counts calls and serves canned answers.
struct StubBackend {
    calls: Arc<AtomicUsize>,
}

impl FuelBackend for StubBackend {
    fn collections(
        &self,
        _filters: &CollectionFilters,
        page: usize,
        page_size: usize,
    ) -> Result<CollectionsPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CollectionsPage {
            total: 0,
            page,
            page_size,
            data: Vec::new(),
        })
    }

    fn avg_price_by_fuel(&self) -> Result<Vec<AvgPriceByFuel>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FuelMonitorError::Service {
            status: 503,
            endpoint: "/kpis/avg-price-by-fuel".to_string(),
        })
    }

    fn volume_by_vehicle(&self) -> Result<Vec<VolumeByVehicle>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            VolumeByVehicle {
                vehicle_type: "Carreta".to_string(),
                total_volume: 300.0,
                total_records: 1,
            },
            VolumeByVehicle {
                vehicle_type: "Carro".to_string(),
                total_volume: 100.0,
                total_records: 2,
            },
        ])
    }

    fn driver_report(&self, search: &str) -> Result<DriverReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FuelMonitorError::NotFound(search.to_string()))
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

fn stub_sdk() -> (FuelMonitorSdk, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let sdk = FuelMonitorSdk::builder()
        .backend(StubBackend {
            calls: calls.clone(),
        })
        .build()
        .unwrap();
    (sdk, calls)
}

#[test]
fn injected_backend_receives_defaults() {
    let (sdk, calls) = stub_sdk();
    let page = sdk.collections(&CollectionFilters::default(), None, None).unwrap();
    assert_eq!((page.page, page.page_size), (1, 10));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(sdk.to_string(), "FuelMonitorSdk(backend=stub)");
}

#[test]
fn invalid_input_never_reaches_backend() {
    let (sdk, calls) = stub_sdk();
    assert!(sdk.driver_report(" ").is_err());
    assert!(sdk.collections(&CollectionFilters::default(), None, Some(0)).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn service_failure_has_generic_user_message() {
    let (sdk, _calls) = stub_sdk();
    let err = sdk.avg_price_by_fuel().unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(
        err.user_message(),
        "Could not load data from the fuel monitor service."
    );
}

#[test]
fn shares_computed_from_backend_volumes() {
    let (sdk, _calls) = stub_sdk();
    let shares = sdk.volume_shares().unwrap();
    assert_eq!(shares[0].vehicle_type, "Carreta");
    assert!(common::approx_eq(shares[0].share, 0.75));
    assert!(common::approx_eq(shares[1].share, 0.25));
}

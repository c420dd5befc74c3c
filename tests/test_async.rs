//! Async wrapper tests (requires the `async` feature).

#![cfg(feature = "async")]

mod common;

use fuel_monitor_sdk::{AsyncFuelMonitorSdk, CollectionFilters, Dataset, FuelMonitorSdk, LocalBackend};

#[tokio::test]
async fn async_local_queries() {
    let sdk = AsyncFuelMonitorSdk::builder().local().build().await.unwrap();

    let page = sdk
        .collections(CollectionFilters::default(), Some(2), None)
        .await
        .unwrap();
    assert_eq!(page.total, 15);
    assert_eq!(common::ids(&page.data), vec![11, 12, 13, 14, 15]);

    assert_eq!(sdk.avg_price_by_fuel().await.unwrap().len(), 3);
    assert_eq!(sdk.volume_by_vehicle().await.unwrap().len(), 5);

    let report = sdk.driver_report("joão silva").await.unwrap();
    assert_eq!(report.total_refuels, 3);
}

#[tokio::test]
async fn async_not_found_is_distinguished() {
    let sdk = AsyncFuelMonitorSdk::builder().local().build().await.unwrap();
    let err = sdk.driver_report("nonexistent-name-xyz").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn concurrent_queries_share_one_sdk() {
    let sdk = AsyncFuelMonitorSdk::builder()
        .local()
        .dataset(Dataset::generate(60, 11))
        .build()
        .await
        .unwrap();

    let a = sdk.clone();
    let b = sdk.clone();
    let (first, second) = tokio::join!(
        a.collections(CollectionFilters::default(), Some(1), Some(20)),
        b.collections(CollectionFilters::default(), Some(1), Some(20)),
    );
    assert_eq!(first.unwrap(), second.unwrap());
}

#[tokio::test]
async fn run_exposes_the_sync_sdk() {
    let sdk = AsyncFuelMonitorSdk::builder().local().build().await.unwrap();
    let shares = sdk.run(|s| s.volume_shares()).await.unwrap();
    assert_eq!(shares.len(), 5);
}

#[tokio::test]
async fn from_sdk_wraps_a_prebuilt_sdk() {
    let sdk = FuelMonitorSdk::builder()
        .backend(LocalBackend::new(Dataset::generate(12, 3)))
        .build()
        .unwrap();
    let sdk = AsyncFuelMonitorSdk::from_sdk(sdk);

    let described = sdk.run(|s| Ok(s.backend().describe())).await.unwrap();
    assert_eq!(described, "local(12 records)");

    let page = sdk
        .collections(CollectionFilters::default(), None, Some(5))
        .await
        .unwrap();
    assert_eq!(page.total, 12);
    assert_eq!(page.data.len(), 5);
}

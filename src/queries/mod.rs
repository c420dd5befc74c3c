//! The local query engine.
//!
//! Each module provides a query struct that borrows a [`Dataset`](crate::dataset::Dataset)
//! and exposes pure, read-only operations over it. Calling any of them twice
//! with the same input returns the same result.

pub mod collections;
pub mod kpis;
pub mod reports;

pub use collections::CollectionQuery;
pub use kpis::KpiQuery;
pub use reports::ReportQuery;

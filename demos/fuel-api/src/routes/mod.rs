pub mod collections;
pub mod kpis;
pub mod meta;
pub mod reports;

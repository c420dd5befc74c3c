pub mod collection;
pub mod kpi;
pub mod report;

pub use collection::*;
pub use kpi::*;
pub use report::*;

//! Data models for the landing site

pub mod catalog;
pub mod record;

pub use catalog::{sample_records, CoverageSummary};
pub use record::{ImplementationStatus, TraceRecord};

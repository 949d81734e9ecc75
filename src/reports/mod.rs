//! Filtering and report windows
//!
//! - Filters over a loaded collection (kind, date range, vendor)
//! - Calendar report periods

pub mod filter;
pub mod period;

pub use filter::{by_date_range, by_kind, by_vendor, DateRange};
pub use period::ReportPeriod;
